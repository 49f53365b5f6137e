//! Digit reduction: the leaf operation every other stage builds on.

/// The three master numbers, never reduced when preservation is requested.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// True if `n` is one of 11, 22, 33.
pub const fn is_master(n: u32) -> bool {
    matches!(n, 11 | 22 | 33)
}

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Sum of every decimal digit of `day`, `month` and `year` taken together.
///
/// Equivalent to summing the digits of the unpadded concatenation
/// `"{day}{month}{year}"`.
pub const fn date_digit_sum(day: u32, month: u32, year: u32) -> u32 {
    digit_sum(day) + digit_sum(month) + digit_sum(year)
}

/// Repeatedly replace `n` by its digit sum until it is a single digit.
///
/// With `preserve_master`, stop as soon as `n` is 11, 22 or 33, including
/// when the input already is one. Values 0..=9 are returned unchanged.
pub const fn reduce(mut n: u32, preserve_master: bool) -> u32 {
    while n > 9 {
        if preserve_master && is_master(n) {
            return n;
        }
        n = digit_sum(n);
    }
    n
}

/// Reduce to a plain digit 1..=9, never stopping at a master number.
pub const fn reduce_full(n: u32) -> u32 {
    reduce(n, false)
}

/// Non-zero decimal digits of the unpadded `"{day}{month}{year}"` string, in order.
pub fn date_digits(day: u32, month: u32, year: u32) -> Vec<u8> {
    let mut digits = Vec::with_capacity(8);
    for part in [day, month, year] {
        push_digits(part, &mut digits);
    }
    digits.retain(|&d| d != 0);
    digits
}

fn push_digits(n: u32, out: &mut Vec<u8>) {
    if n >= 10 {
        push_digits(n / 10, out);
    }
    out.push((n % 10) as u8);
}
