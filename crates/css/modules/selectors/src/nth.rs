//! `An+B` microsyntax for structural pseudo-class arguments.
//! Selectors 3 §6.6.5.2: :nth-child() pseudo-class
//!
//! Parsing is deliberately lenient: malformed fragments read as zero instead of
//! rejecting the selector, so every input produces some `(a, b)` pair.

/// Coefficients of an `An+B` expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnB {
    /// The `a` coefficient (step between matched indices).
    pub step: i32,
    /// The `b` offset (first matched index).
    pub offset: i32,
}

impl Default for AnB {
    /// `n`, i.e. every index.
    #[inline]
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl AnB {
    #[inline]
    pub const fn new(step: i32, offset: i32) -> Self {
        Self { step, offset }
    }

    /// Whether `index` (1-based) equals `a*n + b` for some integer `n >= 0`.
    /// Selectors 3 §6.6.5.2
    pub fn matches(self, index: usize) -> bool {
        // i128 holds every usize index and any i32 offset without overflow.
        let index = i128::try_from(index).unwrap_or(i128::MAX);
        let step = i128::from(self.step);
        let offset = i128::from(self.offset);
        if step == 0 {
            return index == offset;
        }
        let diff = index - offset;
        diff % step == 0 && diff / step >= 0
    }
}

/// Parse the text between the parentheses of an `nth-*` pseudo-class.
///
/// `even` and `odd` are keywords; otherwise the text is split on the first `n`.
/// Missing or unreadable numbers become `0`, a bare or signed `n` has `a = ±1`,
/// and a trailing sign without digits yields `b = 0`.
pub fn parse_nth(parameters: &str) -> AnB {
    let parameters = parameters.trim();
    match parameters {
        "even" => return AnB::new(2, 0),
        "odd" => return AnB::new(2, 1),
        _ => {}
    }

    let Some(n_index) = parameters.find('n') else {
        return AnB::new(0, parse_int_prefix(parameters));
    };

    let (left, tail) = parameters.split_at(n_index);
    let step = if left.is_empty() {
        1
    } else if left.trim() == "-" {
        -1
    } else {
        parse_int_prefix(left)
    };

    // `tail` starts with the `n` itself.
    let right = tail.get(1..).unwrap_or_default();
    let sign = right
        .find('+')
        .map(|pos| (pos, 1))
        .or_else(|| right.find('-').map(|pos| (pos, -1)));
    let offset = match sign {
        Some((pos, factor)) => {
            let digits = right.get(pos.saturating_add(1)..).unwrap_or_default();
            parse_int_prefix(digits).saturating_mul(factor)
        }
        None => 0,
    };
    AnB::new(step, offset)
}

/// Read a leading integer the way C's `atoi` does: optional whitespace, an optional
/// sign, then digits up to the first non-digit. Nothing readable gives `0`; values
/// past the `i32` range saturate.
fn parse_int_prefix(text: &str) -> i32 {
    let bytes = text.as_bytes();
    let mut index = 0usize;
    while bytes.get(index).is_some_and(u8::is_ascii_whitespace) {
        index = index.saturating_add(1);
    }
    let negative = match bytes.get(index) {
        Some(b'-') => {
            index = index.saturating_add(1);
            true
        }
        Some(b'+') => {
            index = index.saturating_add(1);
            false
        }
        _ => false,
    };
    let mut value: i64 = 0;
    while let Some(&byte) = bytes.get(index) {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'))
            .min(i64::from(i32::MAX) + 1);
        index = index.saturating_add(1);
    }
    let signed = if negative { -value } else { value };
    i32::try_from(signed).unwrap_or(if negative { i32::MIN } else { i32::MAX })
}
