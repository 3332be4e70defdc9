/// A value describing everything a view needs to be derived.
///
/// `PartialEq` lets the engine skip commits that change nothing, and
/// `Default` is the state of a fresh session.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
