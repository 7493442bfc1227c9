/// Representation used for the literal block distance (aka. glue) of a clause.
pub type LBD = u8;
