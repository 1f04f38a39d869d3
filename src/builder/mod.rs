/*!
Tools for building literals, clauses, and knowledge bases from text.

# Literals

A literal is written `[-|~]SYMBOL[(x,y)]`:
- A leading `-` or `~` negates the literal.
- A symbol which is a single character of the label alphabet (`w`, `p`, `t`, `o`, `s`, `c`, `g`) is read as a [Label], and any other (alphanumeric) symbol is read as a named atom.
- If no coordinate is given, the coordinate `(0,0)` is used.

This is the same format literals are displayed in, so displayed literals may be read back.

# Clauses

A clause is a sequence of literals separated by whitespace.
For readability `|` or `∨` may be placed between literals.

# Knowledge bases

A knowledge base is read with [read_clauses], one clause per line.
Empty lines, and lines beginning with either `#` or `c ` are skipped.

```rust
# use cave_logic::builder::read_clauses;
# use cave_logic::procedures::resolution::resolution;
# use cave_logic::structures::clause::Clause;
let premises = "
## One cue present and three neighbours clear.
-S W1 W2 W3 W4
-W1
-W2
-W3
S
";

let clauses = read_clauses(premises.as_bytes()).unwrap();
assert_eq!(clauses.len(), 5);

let goal: Clause = "W4".parse().unwrap();
assert!(resolution(clauses, &goal).is_entailed());
```

[Label]: crate::structures::label::Label
*/

mod literals;

use std::io::BufRead;

use crate::{
    structures::clause::Clause,
    types::err::{self},
};

/// Reads clauses from `reader`, one clause per line.
///
/// On a malformed line, the error notes the (one-indexed) line number.
pub fn read_clauses(mut reader: impl BufRead) -> Result<Vec<Clause>, err::ErrorKind> {
    let mut clauses = Vec::default();
    let mut buffer = String::with_capacity(256);
    let mut line_counter = 0;

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }

        let line = buffer.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("c ") || line == "c" {
            continue;
        }

        match line.parse::<Clause>() {
            Ok(clause) => clauses.push(clause),
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }
    }

    Ok(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_are_skipped() {
        let text = "c a comment\n#another\n\nA B\nc(1,1) -g(1,1)\n";
        let clauses = read_clauses(text.as_bytes()).unwrap();
        assert_eq!(clauses.len(), 2);
    }

    #[test]
    fn errors_note_the_line() {
        let text = "A\nB\n-\n";
        assert_eq!(
            read_clauses(text.as_bytes()),
            Err(err::ErrorKind::Parse(err::ParseError::Line(3)))
        );
    }
}
