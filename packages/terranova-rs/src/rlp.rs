//! Minimal recursive-length-prefix decoding, enough to read unsigned Ethereum
//! transactions.

use thiserror::Error;

/// Deepest list nesting accepted. Unsigned transactions are a single flat list.
pub const MAX_DEPTH: usize = 16;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RlpError {
    #[error("RLP input is empty")]
    Empty,

    #[error("RLP item is truncated: needs {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },

    #[error("RLP length prefix is not canonical")]
    NonCanonicalLength,

    #[error("RLP has {0} trailing bytes after the top-level item")]
    TrailingBytes(usize),

    #[error("Expected an RLP list")]
    ExpectedList,

    #[error("Expected an RLP string")]
    ExpectedString,

    #[error("RLP integer has leading zero bytes")]
    LeadingZero,

    #[error("RLP integer is {size} bytes, at most {max} allowed")]
    IntegerTooLarge { size: usize, max: usize },

    #[error("RLP list has {0} items, expected {1}")]
    UnexpectedItemCount(usize, &'static str),

    #[error("RLP address must be empty or 20 bytes, got {0}")]
    InvalidAddressLength(usize),

    #[error("Unsigned EIP-155 transaction must carry empty r and s")]
    NonEmptySignature,

    #[error("RLP lists are nested too deeply")]
    TooDeep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rlp<'a> {
    String(&'a [u8]),
    List(Vec<Rlp<'a>>),
}

impl<'a> Rlp<'a> {
    pub fn as_bytes(&self) -> Result<&'a [u8], RlpError> {
        match self {
            Rlp::String(bytes) => Ok(bytes),
            Rlp::List(_) => Err(RlpError::ExpectedString),
        }
    }

    pub fn as_list(&self) -> Result<&[Rlp<'a>], RlpError> {
        match self {
            Rlp::List(items) => Ok(items),
            Rlp::String(_) => Err(RlpError::ExpectedList),
        }
    }

    /// Big-endian unsigned integer of at most `N` bytes, left padded to `N`.
    pub fn as_uint<const N: usize>(&self) -> Result<[u8; N], RlpError> {
        let bytes = self.as_bytes()?;

        if bytes.len() > N {
            return Err(RlpError::IntegerTooLarge {
                size: bytes.len(),
                max: N,
            });
        }

        if bytes.first() == Some(&0) {
            return Err(RlpError::LeadingZero);
        }

        let mut out = [0u8; N];
        out[N - bytes.len()..].copy_from_slice(bytes);
        Ok(out)
    }

    pub fn as_u64(&self) -> Result<u64, RlpError> {
        self.as_uint::<8>().map(u64::from_be_bytes)
    }
}

/// Decodes exactly one top-level item, returning it with its encoded length.
pub fn decode(input: &[u8]) -> Result<(Rlp<'_>, usize), RlpError> {
    if input.is_empty() {
        return Err(RlpError::Empty);
    }

    let (item, consumed) = decode_item(input, 0)?;

    if consumed != input.len() {
        return Err(RlpError::TrailingBytes(input.len() - consumed));
    }

    Ok((item, consumed))
}

fn decode_item(input: &[u8], depth: usize) -> Result<(Rlp<'_>, usize), RlpError> {
    let prefix = *input.first().ok_or(RlpError::Empty)?;

    if prefix >= 0xc0 && depth >= MAX_DEPTH {
        return Err(RlpError::TooDeep);
    }

    match prefix {
        0x00..=0x7f => Ok((Rlp::String(&input[..1]), 1)),
        0x80..=0xb7 => {
            let len = (prefix - 0x80) as usize;
            let payload = take(input, 1, len)?;

            if len == 1 && payload[0] < 0x80 {
                return Err(RlpError::NonCanonicalLength);
            }

            Ok((Rlp::String(payload), 1 + len))
        }
        0xb8..=0xbf => {
            let len_of_len = (prefix - 0xb7) as usize;
            let len = read_long_length(input, len_of_len)?;
            let payload = take(input, 1 + len_of_len, len)?;
            Ok((Rlp::String(payload), 1 + len_of_len + len))
        }
        0xc0..=0xf7 => {
            let len = (prefix - 0xc0) as usize;
            let payload = take(input, 1, len)?;
            Ok((Rlp::List(decode_list(payload, depth + 1)?), 1 + len))
        }
        0xf8..=0xff => {
            let len_of_len = (prefix - 0xf7) as usize;
            let len = read_long_length(input, len_of_len)?;
            let payload = take(input, 1 + len_of_len, len)?;
            Ok((Rlp::List(decode_list(payload, depth + 1)?), 1 + len_of_len + len))
        }
    }
}

fn decode_list(mut payload: &[u8], depth: usize) -> Result<Vec<Rlp<'_>>, RlpError> {
    let mut items = Vec::new();

    while !payload.is_empty() {
        let (item, consumed) = decode_item(payload, depth)?;
        items.push(item);
        payload = &payload[consumed..];
    }

    Ok(items)
}

fn read_long_length(input: &[u8], len_of_len: usize) -> Result<usize, RlpError> {
    let bytes = take(input, 1, len_of_len)?;

    if bytes[0] == 0 || len_of_len > std::mem::size_of::<usize>() {
        return Err(RlpError::NonCanonicalLength);
    }

    let len = bytes
        .iter()
        .fold(0usize, |acc, byte| (acc << 8) | *byte as usize);

    // Lengths below 56 must use the short form
    if len < 56 {
        return Err(RlpError::NonCanonicalLength);
    }

    Ok(len)
}

fn take(input: &[u8], offset: usize, len: usize) -> Result<&[u8], RlpError> {
    let end = offset.checked_add(len).ok_or(RlpError::NonCanonicalLength)?;

    input.get(offset..end).ok_or(RlpError::Truncated {
        needed: end,
        available: input.len(),
    })
}

/// An empty list wrapped in `depth` more lists.
#[cfg(test)]
pub(crate) fn nested_lists(depth: usize) -> Vec<u8> {
    let mut prefixes = Vec::with_capacity(depth);
    let mut len = 1usize;

    for _ in 0..depth {
        let prefix = if len < 56 {
            vec![0xc0 + len as u8]
        } else {
            let bytes = len.to_be_bytes();
            let skip = bytes.iter().take_while(|byte| **byte == 0).count();
            let mut prefix = vec![0xf7 + (bytes.len() - skip) as u8];
            prefix.extend_from_slice(&bytes[skip..]);
            prefix
        };
        len += prefix.len();
        prefixes.push(prefix);
    }

    let mut encoded: Vec<u8> = prefixes.into_iter().rev().flatten().collect();
    encoded.push(0xc0);
    encoded
}
