//! Chunk representation and normalization for streamed request bodies.
//!
//! Upstream producers do not always hand the pipeline raw bytes: an
//! instrumentation layer may coerce a fragment into a string, a number, or a
//! boolean before it reaches a plugin. This module models the accepted
//! payload shapes as a tagged variant so that normalization to bytes is a
//! total function over the type rather than a runtime type inspection.

use bytes::Bytes;

/// A single fragment of a request body as delivered by the hosting pipeline.
///
/// Four shapes are accepted. Raw bytes pass through unchanged; every other
/// shape normalizes through its canonical textual representation, encoded as
/// UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// A raw byte sequence, appended as-is.
    Bytes(Bytes),
    /// Textual data, encoded as UTF-8.
    Text(String),
    /// A numeric fragment, rendered as base-10 digits.
    Integer(i64),
    /// A boolean fragment, rendered as the literal words `true` / `false`.
    Boolean(bool),
}

impl Chunk {
    /// Normalizes this chunk to its canonical byte representation.
    ///
    /// Normalizing a byte chunk is the identity; normalizing the same scalar
    /// value twice yields identical bytes. This function cannot fail.
    pub fn into_bytes(self) -> Bytes {
        match self {
            Chunk::Bytes(bytes) => bytes,
            Chunk::Text(text) => Bytes::from(text),
            Chunk::Integer(number) => Bytes::from(number.to_string()),
            Chunk::Boolean(true) => Bytes::from_static(b"true"),
            Chunk::Boolean(false) => Bytes::from_static(b"false"),
        }
    }
}

impl From<Bytes> for Chunk {
    fn from(bytes: Bytes) -> Self {
        Chunk::Bytes(bytes)
    }
}

impl From<Vec<u8>> for Chunk {
    fn from(bytes: Vec<u8>) -> Self {
        Chunk::Bytes(Bytes::from(bytes))
    }
}

impl From<&'static [u8]> for Chunk {
    fn from(bytes: &'static [u8]) -> Self {
        Chunk::Bytes(Bytes::from_static(bytes))
    }
}

impl From<String> for Chunk {
    fn from(text: String) -> Self {
        Chunk::Text(text)
    }
}

impl From<&str> for Chunk {
    fn from(text: &str) -> Self {
        Chunk::Text(text.to_owned())
    }
}

impl From<i64> for Chunk {
    fn from(number: i64) -> Self {
        Chunk::Integer(number)
    }
}

impl From<bool> for Chunk {
    fn from(flag: bool) -> Self {
        Chunk::Boolean(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_are_identity() {
        let payload = Bytes::from_static(b"\x00\x01binary\xff");
        let chunk = Chunk::Bytes(payload.clone());
        assert_eq!(chunk.into_bytes(), payload);
    }

    #[test]
    fn test_text_encodes_verbatim() {
        let chunk = Chunk::Text("hello".to_owned());
        assert_eq!(chunk.into_bytes(), Bytes::from_static(b"hello"));
    }

    #[test]
    fn test_integer_renders_base10() {
        assert_eq!(Chunk::Integer(1).into_bytes(), Bytes::from_static(b"1"));
        assert_eq!(Chunk::Integer(123).into_bytes(), Bytes::from_static(b"123"));
        assert_eq!(Chunk::Integer(0).into_bytes(), Bytes::from_static(b"0"));
    }

    #[test]
    fn test_negative_integer_keeps_sign() {
        assert_eq!(Chunk::Integer(-42).into_bytes(), Bytes::from_static(b"-42"));
    }

    #[test]
    fn test_boolean_renders_literal_words() {
        assert_eq!(Chunk::Boolean(true).into_bytes(), Bytes::from_static(b"true"));
        assert_eq!(Chunk::Boolean(false).into_bytes(), Bytes::from_static(b"false"));
    }

    #[test]
    fn test_scalar_normalization_is_deterministic() {
        assert_eq!(Chunk::Integer(7).into_bytes(), Chunk::Integer(7).into_bytes());
        assert_eq!(Chunk::Boolean(true).into_bytes(), Chunk::Boolean(true).into_bytes());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Chunk::from("a"), Chunk::Text("a".to_owned()));
        assert_eq!(Chunk::from("a".to_owned()), Chunk::Text("a".to_owned()));
        assert_eq!(Chunk::from(5_i64), Chunk::Integer(5));
        assert_eq!(Chunk::from(true), Chunk::Boolean(true));
        assert_eq!(Chunk::from(vec![b'a']), Chunk::Bytes(Bytes::from_static(b"a")));
        assert_eq!(Chunk::from(&b"a"[..]), Chunk::Bytes(Bytes::from_static(b"a")));
    }
}
