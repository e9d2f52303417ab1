use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Read one line, `None` on end of input.
pub fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Read a (row, col, value) triple, one prompt per integer, re-prompting on
/// unparsable input. Returns `None` on end of input. No bounds validation
/// happens here; the grid's checked write is responsible for that.
pub fn read_user_move(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<(usize, usize, u8)>> {
    let Some(row) = prompt_number(input, out, "Row (0-8): ")? else {
        return Ok(None);
    };
    let Some(col) = prompt_number(input, out, "Col (0-8): ")? else {
        return Ok(None);
    };
    let Some(value) = prompt_number(input, out, "Value (1-9, 0 clears): ")? else {
        return Ok(None);
    };
    Ok(Some((row, col, value)))
}

fn prompt_number<T: FromStr>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<T>> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(number) => return Ok(Some(number)),
            Err(_) => writeln!(out, "enter a number")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_move() {
        let mut input = "3\n4\n7\n".as_bytes();
        let mut out = Vec::new();

        let result = read_user_move(&mut input, &mut out).unwrap();
        assert_eq!(result, Some((3, 4, 7)));
    }

    #[test]
    fn reprompts_on_garbage() {
        let mut input = "x\n 3 \nfour\n4\n7\n".as_bytes();
        let mut out = Vec::new();

        let result = read_user_move(&mut input, &mut out).unwrap();
        assert_eq!(result, Some((3, 4, 7)));

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript.matches("enter a number").count(), 2);
    }

    #[test]
    fn none_on_end_of_input() {
        let mut input = "3\n".as_bytes();
        let mut out = Vec::new();

        let result = read_user_move(&mut input, &mut out).unwrap();
        assert_eq!(result, None);
    }
}
