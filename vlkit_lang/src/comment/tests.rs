use super::*;
use assert_matches::assert_matches;

fn check(text: &str, exp: &str) {
    let out = strip_comments(text);
    assert_eq!(out, exp);
    // Every newline survives, and stripping is idempotent.
    assert_eq!(text.matches('\n').count(), out.matches('\n').count());
    assert_eq!(strip_comments(&out), exp);
}

#[test]
fn test_block_comments() {
    check("a/*b*/c", "ac");
    check("/**/", "");
    check("a/* 1\n2\n*/b", "a\n\nb");
    check("a/*/ */b", "ab");
    // // inside a block comment is inert.
    check("/*a//b*/c", "c");
    check("a/**//**/b", "ab");
    // Unterminated; everything after the opener is gone.
    check("x/*y", "x");
    check("x/*y\nz", "x\n");
}

#[test]
fn test_line_comments() {
    check("x // y\nz", "x \nz");
    check("a//b", "a");
    check("a///b\nc", "a\nc");
    check("a//b\nc//d\ne", "a\nc\ne");
    // A quote inside a line comment does not open a string.
    check("//\"\nb\"c", "\nb\"c");
}

#[test]
fn test_strings() {
    check("\"a//b\"", "\"a//b\"");
    check("\"a/*b*/c\"", "\"a/*b*/c\"");
    check("\"a\"//b", "\"a\"");
    check("\"/*\"*/", "\"/*\"*/");
    // Unterminated string swallows the rest of the input verbatim.
    check("\"a/*b", "\"a/*b");
    // Quote state toggles on every quote; there is no backslash escape.
    check("\"\\\"//x", "\"\\\"");
}

#[test]
fn test_plain_text() {
    check("", "");
    check("a+b/c", "a+b/c");
    check("a\nb\nc", "a\nb\nc");
    // No slash at all takes the borrowed fast path.
    assert_matches!(strip_comments("no comments here"), Cow::Borrowed(_));
    assert_matches!(strip_comments("a/b"), Cow::Owned(_));
}
