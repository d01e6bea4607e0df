//! Log message payload

use std::borrow::Cow;
use std::fmt;

/// The message of one logging call.
///
/// Plain text is used verbatim, so `"100% done {ok}"` is logged exactly as
/// written. Interpolation only happens for pre-formatted arguments, which the
/// logging macros produce with `format_args!` when extra arguments are given.
#[derive(Debug, Clone)]
pub enum Message<'a> {
    Text(Cow<'a, str>),
    Args(fmt::Arguments<'a>),
}

impl Message<'_> {
    pub fn render(self) -> String {
        match self {
            Message::Text(text) => text.into_owned(),
            Message::Args(args) => match args.as_str() {
                Some(text) => text.to_string(),
                None => fmt::format(args),
            },
        }
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Message::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(text: &'a String) -> Self {
        Message::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Message<'_> {
    fn from(text: String) -> Self {
        Message::Text(Cow::Owned(text))
    }
}

impl<'a> From<fmt::Arguments<'a>> for Message<'a> {
    fn from(args: fmt::Arguments<'a>) -> Self {
        Message::Args(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(Message::from("100% {done} %s").render(), "100% {done} %s");
        assert_eq!(Message::from(String::from("owned")).render(), "owned");
    }

    #[test]
    fn test_args_are_interpolated() {
        assert_eq!(Message::from(format_args!("hello {}", "world")).render(), "hello world");
        assert_eq!(Message::from(format_args!("{:>4}|", 7)).render(), "   7|");
    }
}
