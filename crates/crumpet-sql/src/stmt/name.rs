/// An unqualified SQL identifier, quoted when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub String);

impl From<&str> for Name {
    fn from(value: &str) -> Name {
        Name(value.to_string())
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Name {
        Name(value.clone())
    }
}
