//! Shape recognizers for literal token text.
//!
//! The scanner captures a run of characters first and classifies it
//! afterwards, because names, numbers and operators share one character
//! set. Each recognizer here is a small winnow grammar that must consume the
//! whole text for the shape to match.

use winnow::{
    Parser as _,
    combinator::{alt, opt, repeat},
    error::{ContextError, ErrMode},
    token::{literal, one_of, take_while},
};

type PResult<O> = Result<O, ErrMode<ContextError>>;

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// A digit followed by digits that may be separated by single `_`.
fn digit_groups(is_digit: fn(char) -> bool) -> impl FnMut(&mut &str) -> PResult<()> {
    move |input: &mut &str| {
        one_of(is_digit).void().parse_next(input)?;
        repeat(0.., (opt('_'), one_of(is_digit))).parse_next(input)
    }
}

fn decimal(input: &mut &str) -> PResult<()> {
    digit_groups(is_decimal_digit).parse_next(input)
}

fn binary(input: &mut &str) -> PResult<()> {
    ('0', one_of(['b', 'B']), digit_groups(is_binary_digit))
        .void()
        .parse_next(input)
}

fn hexadecimal(input: &mut &str) -> PResult<()> {
    ('0', one_of(['x', 'X']), digit_groups(is_hex_digit))
        .void()
        .parse_next(input)
}

fn octal(input: &mut &str) -> PResult<()> {
    ('0', one_of(['o', 'O']), digit_groups(is_octal_digit))
        .void()
        .parse_next(input)
}

/// `'?[iIuU](8|16|32|64)?`
fn integer_suffix(input: &mut &str) -> PResult<()> {
    (
        opt('\''),
        one_of(['i', 'I', 'u', 'U']),
        opt(alt((literal("8"), literal("16"), literal("32"), literal("64")))),
    )
        .void()
        .parse_next(input)
}

fn integer(input: &mut &str) -> PResult<()> {
    (
        opt('-'),
        alt((binary, hexadecimal, octal, decimal)),
        opt(integer_suffix),
    )
        .void()
        .parse_next(input)
}

fn decimal_number(input: &mut &str) -> PResult<()> {
    (opt('-'), decimal).void().parse_next(input)
}

/// `[eE][+-]?decimal`
fn exponent(input: &mut &str) -> PResult<()> {
    (one_of(['e', 'E']), opt(one_of(['+', '-'])), decimal)
        .void()
        .parse_next(input)
}

/// `'?([fF](32|64)?|[dD])`
fn float_suffix(input: &mut &str) -> PResult<()> {
    (
        opt('\''),
        alt((
            (
                one_of(['f', 'F']),
                opt(alt((literal("32"), literal("64")))),
            )
                .void(),
            one_of(['d', 'D']).void(),
        )),
    )
        .void()
        .parse_next(input)
}

fn floating_point(input: &mut &str) -> PResult<()> {
    let fraction_or_exponent = alt((('.', decimal, opt(exponent)).void(), exponent));
    (
        opt('-'),
        decimal,
        alt(((fraction_or_exponent, opt(float_suffix)).void(), float_suffix)),
    )
        .void()
        .parse_next(input)
}

fn rational_number(input: &mut &str) -> PResult<()> {
    (opt('-'), decimal, '/', decimal).void().parse_next(input)
}

fn uuid(input: &mut &str) -> PResult<()> {
    (
        take_while(8, is_hex_digit),
        '-',
        take_while(4, is_hex_digit),
        '-',
        take_while(4, is_hex_digit),
        '-',
        take_while(4, is_hex_digit),
        '-',
        take_while(12, is_hex_digit),
    )
        .void()
        .parse_next(input)
}

fn two_digits<'i>(input: &mut &'i str) -> PResult<&'i str> {
    take_while(2, is_decimal_digit).parse_next(input)
}

/// `yyyy-mm-dd`
fn date(input: &mut &str) -> PResult<()> {
    (take_while(4, is_decimal_digit), '-', two_digits, '-', two_digits)
        .void()
        .parse_next(input)
}

/// `Z` or `±hh[:mm]`
fn time_zone(input: &mut &str) -> PResult<()> {
    alt((
        one_of(['z', 'Z']).void(),
        (one_of(['+', '-']), two_digits, opt((':', two_digits))).void(),
    ))
    .parse_next(input)
}

/// `Thh:mm[:ss[.fffffffff]][zone]`
fn time(input: &mut &str) -> PResult<()> {
    (
        'T',
        two_digits,
        ':',
        two_digits,
        opt((
            ':',
            two_digits,
            opt(('.', take_while(0..=9, is_decimal_digit))),
        )),
        opt(time_zone),
    )
        .void()
        .parse_next(input)
}

fn date_time(input: &mut &str) -> PResult<()> {
    (date, time).void().parse_next(input)
}

fn is_host_character(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '/' | '?' | '.' | '#' | '-')
}

/// `(https?|ftp)://` host labels and an optional path.
fn url(input: &mut &str) -> PResult<()> {
    (
        alt((literal("https"), literal("http"), literal("ftp"))),
        literal("://"),
        opt(literal("-.")),
        repeat::<_, _, (), _, _>(1.., (take_while(1.., is_host_character), opt('.'))),
        opt(('/', take_while(0.., |c: char| !c.is_whitespace()))),
    )
        .void()
        .parse_next(input)
}

/// Runs a recognizer and requires it to consume all of `text`.
fn matches_fully(mut recognizer: impl FnMut(&mut &str) -> PResult<()>, text: &str) -> bool {
    let mut input = text;
    recognizer(&mut input).is_ok() && input.is_empty()
}

pub(crate) fn is_uuid(text: &str) -> bool {
    matches_fully(uuid, text)
}

pub(crate) fn is_integer(text: &str) -> bool {
    matches_fully(integer, text)
}

/// A plain, optionally negative, decimal integer without suffix.
pub(crate) fn is_decimal_number(text: &str) -> bool {
    matches_fully(decimal_number, text)
}

pub(crate) fn is_floating_point(text: &str) -> bool {
    matches_fully(floating_point, text)
}

pub(crate) fn is_rational_number(text: &str) -> bool {
    matches_fully(rational_number, text)
}

pub(crate) fn is_date(text: &str) -> bool {
    matches_fully(date, text)
}

pub(crate) fn is_time(text: &str) -> bool {
    matches_fully(time, text)
}

pub(crate) fn is_date_time(text: &str) -> bool {
    matches_fully(date_time, text)
}

pub(crate) fn is_url(text: &str) -> bool {
    matches_fully(url, text)
}
