use failure::Fail;

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum ParseError {
    #[fail(display = "unknown coordinate system: {:?}", _0)]
    UnknownSystem(String),

    #[fail(display = "expected \"<longitude>,<latitude>\"")]
    MissingComponent,

    #[fail(display = "too many components, expected \"<longitude>,<latitude>\"")]
    TooManyComponents,

    #[fail(display = "invalid number: {:?}", _0)]
    InvalidNumber(String),
}
