use packhub_derive::packhub_error;
use std::borrow::Cow;

#[packhub_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, DemoError> {
    raw.parse::<u32>().context("parsing shift")
}

fn main() {
    let err = parse("x").unwrap_err();
    assert_eq!(err.to_string(), "Parse error (parsing shift): invalid digit found in string");

    let err: DemoError = "boom".into();
    assert!(matches!(err, DemoError::Internal { .. }));

    let err: Result<(), DemoError> = Err(DemoError::from(String::from("late")));
    let err = err.context("boot").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (boot): late");
}
