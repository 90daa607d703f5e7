use bitflags::bitflags;

bitflags! {
    /// Properties of a descriptor tree.
    ///
    /// Computed once when a node is built and OR-ed up from its children, so
    /// a question about the whole tree is answered by looking at the root.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct TyFlags: u8 {
        /// Some node is a nullable value or an annotated nullable reference.
        const NULLABLE = 1;
        /// Some tuple element carries a custom (non-`ItemN`) label.
        const LABELED = 1 << 1;
        /// Construction skipped at least one argument it does not model,
        /// such as an open type parameter.
        const DROPPED_ARGS = 1 << 2;
    }
}
