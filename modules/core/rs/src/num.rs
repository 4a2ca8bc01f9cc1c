use std::fmt::Debug;

/// Integer types usable as genomic coordinates.
pub trait PrimInt: ::num::PrimInt + Debug + Default {}

impl<T> PrimInt for T where T: ::num::PrimInt + Debug + Default {}
