use super::AdviceRequest;

#[derive(Debug)]
pub enum Action {
    /// Cancels whatever request is in flight.
    AdviceAbort(),
    AdviceRequest(u64, AdviceRequest),
}
