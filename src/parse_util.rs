/// Takes the next byte from the slice. If none is left, the slice is left as-is.
pub const fn take_1(bytes: &[u8]) -> (Option<u8>, &[u8]) {
    let [b, bytes @ ..] = bytes else {
        return (None, bytes);
    };

    (Some(*b), bytes)
}

/// Like `take_1`, but doesn't consume the byte
pub const fn peek_1(bytes: &[u8]) -> Option<u8> {
    let [b, _bytes @ ..] = bytes else { return None };

    Some(*b)
}

/// Advance the slice until `p` is satisfied, without consuming the matching
/// byte. The match may be empty: if the first byte already satisfies `p`, the
/// result is `Some(&[])`. If no byte satisfies `p`, `bytes` is left as-is.
#[inline]
pub fn take_until_fn<P>(p: P, bytes: &[u8]) -> (Option<&[u8]>, &[u8])
where
    P: Fn(u8) -> bool,
{
    for (i, &b) in bytes.iter().enumerate() {
        if p(b) {
            let (res, bytes) = bytes.split_at(i);

            return (Some(res), bytes);
        }
    }

    (None, bytes)
}

/// Like `take_until_fn`, but also consumes the matching byte without adding it
/// to the output.
pub fn take_with(b: u8, bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    let (Some(res), bytes) = take_until_fn(|a| a == b, bytes) else {
        return (None, bytes);
    };

    let (_, bytes) = take_1(bytes);

    (Some(res), bytes)
}

/// Take one line off the slice, consuming the line break.
///
/// A line break is any of
/// * `\n`
/// * `\r`
/// * `\r\n`
///
/// If no line break is left, the whole slice is the line.
pub fn take_line(bytes: &[u8]) -> (&[u8], &[u8]) {
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'\n' => return (&bytes[..i], &bytes[i + 1..]),
            b'\r' => {
                let rest = &bytes[i + 1..];
                let rest = match peek_1(rest) {
                    Some(b'\n') => &rest[1..],
                    _ => rest,
                };

                return (&bytes[..i], rest);
            }
            _ => {}
        }
    }

    (bytes, &[])
}
