pub mod form_state;
pub mod messages;
pub mod request;
pub mod response;
pub mod validation;

pub use form_state::{ImageAttachment, OperationState, ReplyFormState};
pub use request::{GenerateReplyRequest, InlineImage};
pub use response::GenerateReplyResponse;
pub use validation::ValidationError;

use crate::usecases::common::UseCaseMetadata;

pub struct ComposeReply;

impl UseCaseMetadata for ComposeReply {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "compose_reply"
    }

    fn display_name() -> &'static str {
        "Asisten Layanan Pelanggan AI"
    }

    fn description() -> &'static str {
        "AI akan membantu mengembangkan jawaban inti Anda menjadi respons yang formal dan solutif."
    }
}
