use aoc2024::{Error, day1};

const EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

#[test]
fn example_answers() {
    assert_eq!(day1::solve(EXAMPLE), Ok((11, 31)));
}

#[test]
fn input_order_does_not_matter() {
    let reversed: String = EXAMPLE.lines().rev().map(|line| format!("{line}\n")).collect();
    assert_eq!(day1::solve(&reversed), Ok((11, 31)));
}

#[test]
fn tabs_separate_columns_too() {
    assert_eq!(day1::solve("10\t2\n3\t4\n"), Ok((7, 0)));
}

#[test]
fn errors_carry_the_line_number() {
    assert_eq!(
        day1::solve("1 2\n3 4 5\n"),
        Err(Error::ColumnCount { line: 2, found: 3 })
    );
}
