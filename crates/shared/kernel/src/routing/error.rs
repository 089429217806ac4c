use std::borrow::Cow;

/// Route table defects, reported by development-time validation.
#[packhub_derive::packhub_error]
pub enum RoutingError {
    #[error("Duplicate route path{}: {message}", format_context(.context))]
    DuplicatePath { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Duplicate module table{}: {message}", format_context(.context))]
    DuplicateModule { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
