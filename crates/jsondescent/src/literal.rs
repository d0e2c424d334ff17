use crate::Value;

/// The bare-word literals, in the order the value decoder tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    True,
    False,
    Null,
}

impl Keyword {
    pub const ALL: [Keyword; 3] = [Keyword::True, Keyword::False, Keyword::Null];

    pub fn text(self) -> &'static [u8] {
        match self {
            Keyword::True => b"true",
            Keyword::False => b"false",
            Keyword::Null => b"null",
        }
    }

    pub fn value(self) -> Value {
        match self {
            Keyword::True => Value::Bool(true),
            Keyword::False => Value::Bool(false),
            Keyword::Null => Value::Null,
        }
    }
}
