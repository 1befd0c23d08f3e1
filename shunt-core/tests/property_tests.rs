//! 性质测试：对一组表达式检查不变量

mod common;
use common::{assert_close, run_code};
use shunt_core::{convert_to_postfix, join_tokens, tokenize, Token};

/// 括号平衡、只包含合法 token 的表达式
const WELL_FORMED: &[&str] = &[
    "1",
    "-1",
    "1 + 2",
    "3 + 4 * 2 / ( 1 - 5 )",
    "2 ^ 3 ^ 2",
    "1 - 2 + 3",
    "[ ( 4 + 2 ) ^ 2 ] / 3",
    "1 - -5 + (-3.2)",
    "[1.5 * (2 - .5)] ^ [2 / (1 + 1)]",
    "((((7))))",
    "0.25 * [8 - (-8)]",
];

#[test]
fn test_postfix_drops_only_brackets() {
    for expression in WELL_FORMED {
        let tokens = tokenize(expression);
        let postfix = convert_to_postfix(&tokens).unwrap();

        let expected_len = tokens
            .iter()
            .filter(|t| matches!(t, Token::Number(_) | Token::Operator(_)))
            .count();
        assert_eq!(postfix.len(), expected_len, "length mismatch for {expression}");
        assert!(
            postfix.iter().all(|t| !matches!(t, Token::Open(_) | Token::Close(_))),
            "bracket left in postfix for {expression}"
        );
    }
}

#[test]
fn test_retokenize_is_stable() {
    for expression in WELL_FORMED {
        let tokens = tokenize(expression);

        // 紧凑拼接与空格拼接都应得到相同的 token 序列
        let compact: String = tokens.iter().map(Token::text).collect();
        let spaced = join_tokens(&tokens);

        assert_eq!(tokenize(&compact), tokens, "compact re-lex of {expression}");
        assert_eq!(tokenize(&spaced), tokens, "spaced re-lex of {expression}");
    }
}

#[test]
fn test_square_and_round_brackets_are_interchangeable() {
    for expression in WELL_FORMED {
        let swapped: String = expression
            .chars()
            .map(|c| match c {
                '(' => '[',
                ')' => ']',
                '[' => '(',
                ']' => ')',
                other => other,
            })
            .collect();

        let expected = run_code(expression).unwrap();
        assert_close(run_code(&swapped).unwrap(), expected);
    }
}
