use crate::config::{Activity, LBD};

/// The activity and literal block distance of a learnt clause, ordered by how *un*useful the clause is likely to be.
///
/// That is, a clause of higher lbd is greater, and of clauses with equal lbd, the clause of lower activity is greater.
/// So, the greatest value on a max heap is the first candidate for removal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActivityLBD {
    pub activity: Activity,
    pub lbd: LBD,
}

impl PartialOrd for ActivityLBD {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match self.lbd.cmp(&other.lbd) {
            std::cmp::Ordering::Equal => other.activity.partial_cmp(&self.activity),
            order => Some(order),
        }
    }
}
