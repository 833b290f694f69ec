use quickcheck::{Arbitrary, Gen};

mod cursor;
mod tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the element into the data structure
    Insert(T),
    /// Remove the element from the data structure
    Remove(T),
    /// Walk the data structure with a cursor
    Iter,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

/// Routes `tracing` output from the tree through `RUST_LOG`, e.g.
/// `RUST_LOG=ordtree=trace cargo test`.
pub fn init_tracing_for_test() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}
