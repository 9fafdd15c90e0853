use nova_j2k_tree::operators::{display_text_of, precedence_of, translate};
use nova_j2k_tree::{
    JavaTokenType as J, KtOperatorToken, KtTokenType as K, Operator, WordOperator,
};
use pretty_assertions::assert_eq;

const PUNCTUATION: [J; 9] = [
    J::Quest,
    J::Colon,
    J::Dot,
    J::Comma,
    J::Semicolon,
    J::Arrow,
    J::DoubleColon,
    J::Ellipsis,
    J::At,
];

#[test]
fn every_operation_token_has_one_precedence() {
    let banded = [
        (J::Asterisk, 3),
        (J::Div, 3),
        (J::Perc, 3),
        (J::Plus, 4),
        (J::Minus, 4),
        (J::GtGt, 7),
        (J::LtLt, 7),
        (J::GtGtGt, 7),
        (J::Gt, 9),
        (J::Lt, 9),
        (J::Ge, 9),
        (J::Le, 9),
        (J::EqEq, 10),
        (J::Ne, 10),
        (J::AndAnd, 11),
        (J::OrOr, 12),
    ];
    for (token, precedence) in banded {
        assert_eq!(precedence_of(token), Ok(precedence), "{token:?}");
    }

    for &token in J::OPERATION_SET {
        if banded.iter().all(|(banded, _)| *banded != token) {
            assert_eq!(precedence_of(token), Ok(6), "{token:?}");
        }
    }
}

#[test]
fn tokens_outside_the_operation_set_fault() {
    for token in PUNCTUATION {
        assert!(!token.is_operation());
        let err = precedence_of(token).unwrap_err();
        assert_eq!(err.text, token.spelling());
        assert!(Operator::java(token).is_err());
    }
}

#[test]
fn kotlin_precedence_bands() {
    assert_eq!(precedence_of(K::Mul), Ok(3));
    assert_eq!(precedence_of(K::Minus), Ok(4));
    assert_eq!(precedence_of(K::Elvis), Ok(7));
    assert_eq!(precedence_of(K::GtEq), Ok(9));
    assert_eq!(precedence_of(K::EqEqEq), Ok(10));
    assert_eq!(precedence_of(K::ExclEqEqEq), Ok(10));
    assert_eq!(precedence_of(K::AndAnd), Ok(11));
    assert_eq!(precedence_of(K::OrOr), Ok(12));
    assert_eq!(precedence_of(K::PlusEq), Ok(6));
    assert_eq!(precedence_of(WordOperator::Shl), Ok(6));
}

#[test]
fn translation_table() {
    use KtOperatorToken::{SingleValue, Word};

    let table = [
        (J::Div, SingleValue(K::Div)),
        (J::Minus, SingleValue(K::Minus)),
        (J::AndAnd, SingleValue(K::AndAnd)),
        (J::OrOr, SingleValue(K::OrOr)),
        (J::Plus, SingleValue(K::Plus)),
        (J::Asterisk, SingleValue(K::Mul)),
        (J::Gt, SingleValue(K::Gt)),
        (J::Ge, SingleValue(K::GtEq)),
        (J::Lt, SingleValue(K::Lt)),
        (J::Le, SingleValue(K::LtEq)),
        (J::Perc, SingleValue(K::Perc)),
        (J::Eq, SingleValue(K::Eq)),
        (J::EqEq, SingleValue(K::EqEq)),
        (J::Ne, SingleValue(K::ExclEq)),
        (J::PlusEq, SingleValue(K::PlusEq)),
        (J::MinusEq, SingleValue(K::MinusEq)),
        (J::AsteriskEq, SingleValue(K::MultEq)),
        (J::DivEq, SingleValue(K::DivEq)),
        (J::PercEq, SingleValue(K::PercEq)),
        (J::PlusPlus, SingleValue(K::PlusPlus)),
        (J::MinusMinus, SingleValue(K::MinusMinus)),
        (J::Excl, SingleValue(K::Excl)),
        (J::And, Word(WordOperator::And)),
        (J::AndEq, Word(WordOperator::And)),
        (J::Or, Word(WordOperator::Or)),
        (J::OrEq, Word(WordOperator::Or)),
        (J::Xor, Word(WordOperator::Xor)),
        (J::XorEq, Word(WordOperator::Xor)),
        (J::GtGtGt, Word(WordOperator::Ushr)),
        (J::GtGtGtEq, Word(WordOperator::Ushr)),
        (J::GtGt, Word(WordOperator::Shr)),
        (J::GtGtEq, Word(WordOperator::Shr)),
        (J::LtLt, Word(WordOperator::Shl)),
        (J::LtLtEq, Word(WordOperator::Shl)),
    ];
    for (java, kotlin) in table {
        assert_eq!(translate(java), Ok(kotlin), "{java:?}");
    }

    let err = translate(J::Tilde).unwrap_err();
    assert_eq!(err.text, "~");
    for token in PUNCTUATION {
        assert!(translate(token).is_err(), "{token:?}");
    }
}

#[test]
fn word_forms_are_spelled_exactly() {
    assert_eq!(translate(J::And).unwrap().text(), "and");
    assert_eq!(translate(J::GtGtGt).unwrap().text(), "ushr");
    assert_eq!(display_text_of(J::And), Ok("and"));
    assert_eq!(display_text_of(J::OrEq), Ok("or"));
    assert_eq!(display_text_of(J::GtGtGt), Ok("ushr"));
    assert_eq!(display_text_of(J::LtLtEq), Ok("shl"));
    assert_eq!(display_text_of(J::PercEq), Ok("%="));
    assert_eq!(display_text_of(J::Ne), Ok("!="));
}

#[test]
fn display_text_faults_carry_the_spelling() {
    let err = display_text_of(J::Tilde).unwrap_err();
    assert_eq!(err.to_string(), "not implemented: Java operator token `~`");
    assert_eq!(display_text_of(J::DoubleColon).unwrap_err().text, "::");
}

#[test]
fn operator_translation_drops_the_compound_form() {
    let java = Operator::java(J::AndEq).unwrap();
    assert!(java.is_compound_assignment());

    let kotlin = java.to_kotlin().unwrap();
    assert_eq!(kotlin, Operator::kotlin(WordOperator::And));
    assert!(!kotlin.is_compound_assignment());

    let plus_eq = Operator::java(J::PlusEq).unwrap().to_kotlin().unwrap();
    assert_eq!(plus_eq, Operator::kotlin(K::PlusEq));
    assert!(plus_eq.is_compound_assignment());
}
