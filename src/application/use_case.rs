use super::response::ResponseDispatcher;
use crate::error::Result;

/// A single piece of business logic, independent of how it is delivered.
///
/// Each use case names its own request, response and error shapes.
pub trait UseCase {
    type Request;
    type Response;
    type Error;

    fn perform(&self, request: Self::Request) -> std::result::Result<Self::Response, Self::Error>;

    /// Performs the use case and hands the outcome to exactly one of the
    /// dispatcher's callbacks.
    ///
    /// Only fails when the callback for the produced outcome was never
    /// registered.
    fn perform_with<R>(
        &self,
        request: Self::Request,
        dispatcher: ResponseDispatcher<Self::Response, Self::Error, R>,
    ) -> Result<R> {
        dispatcher.dispatch(self.perform(request))
    }
}
