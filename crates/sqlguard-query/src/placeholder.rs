//! Placeholder scanning and rendering.
//!
//! Templates are written with `?` markers. A `?` counts as a placeholder only
//! in plain SQL text: markers inside single-quoted literals, double-quoted
//! identifiers, `--` line comments and `/* */` block comments are left alone.

/// How positional placeholders are spelled for a backend.
///
/// | Style | Backends | Spelling |
/// |-------|----------|----------|
/// | [`QuestionMark`](Self::QuestionMark) | MySQL, SQLite | `?, ?, ...` |
/// | [`Numbered`](Self::Numbered) | PostgreSQL | `$1, $2, ...` |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlaceholderStyle {
	/// `?` for every parameter
	#[default]
	QuestionMark,
	/// `$1`, `$2`, ... (1-based)
	Numbered,
}

impl PlaceholderStyle {
	/// Write the placeholder for the parameter at `index` (1-based).
	fn write(self, out: &mut String, index: usize) {
		match self {
			Self::QuestionMark => out.push('?'),
			Self::Numbered => {
				out.push('$');
				out.push_str(&index.to_string());
			}
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lexeme {
	Code,
	SingleQuoted,
	DoubleQuoted,
	LineComment,
	BlockComment,
}

/// Walk `sql`, copying it to the returned string and calling
/// `on_placeholder` for each `?` found in plain SQL text.
fn scan<F>(sql: &str, mut on_placeholder: F) -> (String, usize)
where
	F: FnMut(&mut String, usize),
{
	let mut out = String::with_capacity(sql.len());
	let mut count = 0;
	let mut state = Lexeme::Code;
	let mut chars = sql.chars().peekable();

	while let Some(c) = chars.next() {
		match state {
			Lexeme::Code => match c {
				'?' => {
					count += 1;
					on_placeholder(&mut out, count);
					continue;
				}
				'\'' => state = Lexeme::SingleQuoted,
				'"' => state = Lexeme::DoubleQuoted,
				'-' if chars.peek() == Some(&'-') => {
					out.push(c);
					out.push('-');
					chars.next();
					state = Lexeme::LineComment;
					continue;
				}
				'/' if chars.peek() == Some(&'*') => {
					out.push(c);
					out.push('*');
					chars.next();
					state = Lexeme::BlockComment;
					continue;
				}
				_ => {}
			},
			// A doubled quote ('') closes and immediately reopens the literal.
			Lexeme::SingleQuoted if c == '\'' => state = Lexeme::Code,
			Lexeme::DoubleQuoted if c == '"' => state = Lexeme::Code,
			Lexeme::LineComment if c == '\n' => state = Lexeme::Code,
			Lexeme::BlockComment if c == '*' && chars.peek() == Some(&'/') => {
				out.push(c);
				out.push('/');
				chars.next();
				state = Lexeme::Code;
				continue;
			}
			_ => {}
		}
		out.push(c);
	}

	(out, count)
}

/// Count the positional placeholders in `sql`.
///
/// ```rust
/// use sqlguard_query::placeholder::count_placeholders;
///
/// assert_eq!(count_placeholders("SELECT * FROM users WHERE name = ?"), 1);
/// assert_eq!(count_placeholders("SELECT '?' FROM t -- ?"), 0);
/// ```
#[must_use]
pub fn count_placeholders(sql: &str) -> usize {
	scan(sql, |_, _| {}).1
}

/// Rewrite the placeholders of `sql` in the given style.
///
/// ```rust
/// use sqlguard_query::placeholder::{rewrite_placeholders, PlaceholderStyle};
///
/// assert_eq!(
///     rewrite_placeholders("SELECT * FROM t WHERE a = ? AND b = ?", PlaceholderStyle::Numbered),
///     "SELECT * FROM t WHERE a = $1 AND b = $2"
/// );
/// ```
#[must_use]
pub fn rewrite_placeholders(sql: &str, style: PlaceholderStyle) -> String {
	scan(sql, |out, index| style.write(out, index)).0
}
