/*!
A record of the premises from which derived facts follow, used to extract unsatisfiable cores.

When trace generation is enabled, a context notes:
- For each learnt clause, the clauses resolved to derive the clause, and the atoms valued at level `0` whose literals were dropped from the clause.
- For each atom valued at level `0` by propagation, the reason for the value, and the atoms whose values made the reason assert.
- For the final conflict of a solve, the premises from which the conflict follows.

Together, these form a graph on [nodes](Node) in which every path ends at an original clause.
An unsatisfiable core is then the set of original clauses reachable from the final conflict.

Premises are kept after a learnt clause is removed, as the clause may still be a premise of some other node.
As keys of learnt clauses are retokened when a slot is reused, distinct clauses never share a node.
*/

use std::collections::{HashMap, HashSet};

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// A node of the premise graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    /// A clause.
    Clause(ClauseKey),

    /// The value of an atom at level `0`.
    Fixed(Atom),
}

/// The trace of a context.
#[derive(Default)]
pub struct Trace {
    /// The premises of each derived node.
    premises: HashMap<Node, Vec<Node>>,

    /// Premises of a conflict at level `0`, if one has been found.
    /// Such a conflict does not depend on assumptions, and so holds for every later solve.
    fundamental_conflict: Option<Vec<Node>>,

    /// Premises of a conflict with the assumptions of the most recent solve, if one was found.
    assumption_conflict: Option<Vec<Node>>,

    /// For each original clause, whether the clause is in the core of the most recent unsatisfiable solve.
    core_clauses: Vec<bool>,

    /// For each atom, whether the atom occurs in some clause of the core.
    core_atoms: Vec<bool>,
}

impl Trace {
    /// Notes `node` follows from `premises`.
    ///
    /// The first record of a node is kept, as a node is derived at most once.
    pub fn note_premises(&mut self, node: Node, premises: Vec<Node>) {
        self.premises.entry(node).or_insert(premises);
    }

    /// The premises of `node`, if `node` is derived.
    pub fn premises_of(&self, node: &Node) -> Option<&[Node]> {
        self.premises.get(node).map(|premises| premises.as_slice())
    }

    /// Notes a conflict at level `0`.
    pub fn note_fundamental_conflict(&mut self, premises: Vec<Node>) {
        if self.fundamental_conflict.is_none() {
            self.fundamental_conflict = Some(premises);
        }
    }

    /// Notes a conflict with the assumptions of the current solve.
    pub fn note_assumption_conflict(&mut self, premises: Vec<Node>) {
        self.assumption_conflict = Some(premises);
    }

    /// Forgets the conflict with the assumptions of the previous solve.
    pub fn clear_assumption_conflict(&mut self) {
        self.assumption_conflict = None;
    }

    /// The premises of the final conflict, preferring a conflict at level `0`.
    pub fn final_conflict(&self) -> Option<&[Node]> {
        self.fundamental_conflict
            .as_deref()
            .or(self.assumption_conflict.as_deref())
    }

    /// Original clauses reachable from `conflict`, as a set of original clause indices.
    pub fn reachable_originals(&self, conflict: &[Node]) -> HashSet<usize> {
        let mut originals = HashSet::default();
        let mut seen: HashSet<Node> = HashSet::default();
        let mut queue = conflict.to_vec();

        while let Some(node) = queue.pop() {
            if !seen.insert(node) {
                continue;
            }

            if let Node::Clause(ClauseKey::Original(index)) = node {
                originals.insert(index as usize);
            }

            if let Some(premises) = self.premises_of(&node) {
                queue.extend(premises.iter().filter(|premise| !seen.contains(*premise)));
            }
        }

        log::trace!(target: targets::CORE, "{} original clauses reachable from {} nodes", originals.len(), seen.len());
        originals
    }

    /// Stores the core, as flags over the original clauses and atoms.
    pub fn set_core(&mut self, core_clauses: Vec<bool>, core_atoms: Vec<bool>) {
        self.core_clauses = core_clauses;
        self.core_atoms = core_atoms;
    }

    /// Forgets the core.
    pub fn clear_core(&mut self) {
        self.core_clauses.clear();
        self.core_atoms.clear();
    }

    /// Whether the original clause at `index` is in the core.
    pub fn in_core(&self, index: usize) -> bool {
        self.core_clauses.get(index).copied().unwrap_or(false)
    }

    /// Whether `atom` occurs in some clause of the core.
    pub fn atom_in_core(&self, atom: Atom) -> bool {
        self.core_atoms.get(atom as usize).copied().unwrap_or(false)
    }
}
