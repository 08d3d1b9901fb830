//! API-level run tests

use jam_api::{
    counted, run, run_to_string, sequence, solve_counted, solve_sequence, JamError, RunConfig,
    RunOutput, TokenStream,
};
use std::io::{self, Write};

type Input<'a> = TokenStream<&'a [u8]>;

fn pair_sum(tokens: &mut Input) -> Result<i64, JamError> {
    let (a, b): (i64, i64) = tokens.read()?;
    Ok(a + b)
}

/// Closes after `lines` writes
struct ClosedPipe {
    written: Vec<u8>,
    lines: usize,
}

impl Write for ClosedPipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.lines == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe (os error 32)"));
        }
        self.lines -= 1;
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_end_to_end_example() {
    let output = run_to_string(counted(pair_sum), "3\n1 2\n3 4\n5 6\n", &RunConfig::default()).unwrap();
    assert_eq!(output, "Case #1: 3\nCase #2: 7\nCase #3: 11\n");
}

#[test]
fn test_end_to_end_newline_layout() {
    let config = RunConfig::default().with_insert_newline(true);
    let output = run_to_string(counted(pair_sum), "3\n1 2\n3 4\n5 6\n", &config).unwrap();
    assert_eq!(output, "Case #1:\n3\nCase #2:\n7\nCase #3:\n11\n");
}

#[test]
fn test_zero_cases_no_output() {
    let mut output = Vec::new();
    let result = solve_counted(pair_sum, "0".as_bytes(), &mut output, &RunConfig::default()).unwrap();
    assert_eq!(result, RunOutput { cases: 0, interrupted: false });
    assert!(output.is_empty());
}

#[test]
fn test_broken_pipe_is_not_an_error() {
    let mut sink = ClosedPipe { written: Vec::new(), lines: 2 };
    let result = run(
        counted(pair_sum),
        "5\n1 1\n2 2\n3 3\n4 4\n5 5\n".as_bytes(),
        &mut sink,
        &RunConfig::default(),
    )
    .unwrap();
    assert_eq!(result, RunOutput { cases: 2, interrupted: true });
    assert_eq!(String::from_utf8(sink.written).unwrap(), "Case #1: 2\nCase #2: 4\n");
}

#[test]
fn test_parse_error_surfaces() {
    let mut output = Vec::new();
    let err = solve_counted(pair_sum, "2\n1 2\none 2\n".as_bytes(), &mut output, &RunConfig::default())
        .unwrap_err();
    match err {
        JamError::Token(token_err) => assert_eq!(token_err.token(), Some("one")),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(output, b"Case #1: 3\n");
}

#[test]
fn test_exhausted_input_surfaces() {
    let err = run_to_string(counted(pair_sum), "4\n1 2\n", &RunConfig::default()).unwrap_err();
    assert!(matches!(err, JamError::Token(ref e) if e.is_exhausted()));
    assert_eq!(err.phase(), "tokens");
}

#[test]
fn test_solver_error_passes_through() {
    let err = run_to_string(
        counted(|tokens: &mut Input| -> Result<u64, JamError> {
            let n: u64 = tokens.next()?;
            if n == 0 {
                return Err(JamError::solve("zero has no factorisation"));
            }
            Ok(n)
        }),
        "2 6 0",
        &RunConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "solver error: zero has no factorisation");
}

fn running_totals(mut tokens: Input) -> Vec<Result<i64, JamError>> {
    let values = match tokens.collect_counted::<i64>() {
        Ok(values) => values,
        Err(err) => return vec![Err(err.into())],
    };
    values
        .iter()
        .scan(0, |total, value| {
            *total += value;
            Some(Ok(*total))
        })
        .collect()
}

#[test]
fn test_solve_sequence() {
    let mut output = Vec::new();
    let result = solve_sequence(running_totals, "4 1 2 3 4".as_bytes(), &mut output, &RunConfig::default()).unwrap();
    assert_eq!(result.cases, 4);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Case #1: 1\nCase #2: 3\nCase #3: 6\nCase #4: 10\n"
    );
}

#[test]
fn test_sequence_adapter_with_run_to_string() {
    let output = run_to_string(sequence(running_totals), "2 5 5", &RunConfig::default()).unwrap();
    assert_eq!(output, "Case #1: 5\nCase #2: 10\n");

    let err = run_to_string(sequence(running_totals), "x", &RunConfig::default()).unwrap_err();
    assert!(matches!(err, JamError::Token(ref e) if e.is_parse()));
}

#[test]
fn test_multi_line_solution_text() {
    struct Grid(Vec<String>);
    impl std::fmt::Display for Grid {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0.join("\n"))
        }
    }

    let config = RunConfig::default().with_insert_newline(true);
    let output = run_to_string(
        counted(|tokens: &mut Input| -> Result<Grid, JamError> {
            let (rows, cols): (usize, usize) = tokens.read()?;
            Ok(Grid((0..rows).map(|_| ".".repeat(cols)).collect()))
        }),
        "1\n2 3",
        &config,
    )
    .unwrap();
    assert_eq!(output, "Case #1:\n...\n...\n");
}
