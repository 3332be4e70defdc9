/// One discrete request to change a session's selections.
///
/// Intents carry data only. Whether a request is applied, and how, is up
/// to the [`Reducer`](super::Reducer) that receives it.
pub trait Intent: Send + 'static {}
