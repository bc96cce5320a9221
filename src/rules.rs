use regex::Regex;

use crate::libs::colored;
use crate::types::HighlightRule;

// Reserved words, one alternation per language.
const KEYWORDS_C: &str = "alignas|alignof|and|and_eq|asm|auto|bool|break|case|catch|char|class|const|constexpr|const_cast|continue|decltype|default|delete|do|double|dynamic_cast|else|enum|explicit|export|extern|false|float|for|friend|goto|if|inline|int|long|mutable|namespace|new|noexcept|nullptr|operator|private|protected|public|register|reinterpret_cast|return|short|signed|sizeof|static|static_assert|static_cast|struct|switch|template|this|thread_local|throw|true|try|typedef|typeid|typename|union|unsigned|using|virtual|void|volatile|wchar_t|while|xor|xor_eq";

const KEYWORDS_PY: &str = "False|None|True|and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield";

fn rule(ptn: &str, color: &'static str) -> HighlightRule {
    // patterns here are fixed literals; failing to compile one is a bug
    HighlightRule {
        pattern: Regex::new(ptn).unwrap(),
        color,
    }
}

lazy_static! {
    // Rule order is part of the contract: when two rules match at the
    // same offset, the earlier one wins (see highlight::scan).
    static ref RULES_C_FAMILY: Vec<HighlightRule> = vec![
        rule(&format!(r"\b({})\b", KEYWORDS_C), colored::BLUE),
        rule(r#""[^"\\]*(\\.[^"\\]*)*""#, colored::ORANGE),
        rule(r"'[^'\\]*(\\.[^'\\]*)*'", colored::ORANGE),
        rule(r"//.*$", colored::GRAY),
        rule(r"\b\d+(\.\d+)?\b", colored::MAGENTA),
    ];

    static ref RULES_PYTHON: Vec<HighlightRule> = vec![
        rule(&format!(r"\b({})\b", KEYWORDS_PY), colored::BLUE),
        rule(r#""([^"\\]|\\.)*""#, colored::ORANGE),
        rule(r"'([^'\\]|\\.)*'", colored::ORANGE),
        rule(r"#.*$", colored::GRAY),
        rule(r"\b\d+(\.\d+)?\b", colored::MAGENTA),
    ];
}

/// Look up the rule table for a file extension.
///
/// Lookup is exact and case sensitive. Extensions without a table get an
/// empty slice, which makes the highlighter print every line verbatim.
pub fn rules_for(ext: &str) -> &'static [HighlightRule] {
    match ext {
        "cpp" | "hpp" | "c" | "h" => &RULES_C_FAMILY,
        "py" => &RULES_PYTHON,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::rules_for;
    use crate::libs::colored;

    #[test]
    fn test_rules_for_known_extensions() {
        assert_eq!(rules_for("cpp").len(), 5);
        assert_eq!(rules_for("hpp").len(), 5);
        assert_eq!(rules_for("c").len(), 5);
        assert_eq!(rules_for("h").len(), 5);
        assert_eq!(rules_for("py").len(), 5);
    }

    #[test]
    fn test_rules_for_unknown_extensions() {
        assert!(rules_for("txt").is_empty());
        assert!(rules_for("rs").is_empty());
        assert!(rules_for("").is_empty());
        // lookup is case sensitive
        assert!(rules_for("PY").is_empty());
        assert!(rules_for("Cpp").is_empty());
    }

    #[test]
    fn test_rule_order_and_colors() {
        for ext in ["cpp", "py"] {
            let rules = rules_for(ext);
            assert_eq!(rules[0].color, colored::BLUE);
            assert_eq!(rules[1].color, colored::ORANGE);
            assert_eq!(rules[2].color, colored::ORANGE);
            assert_eq!(rules[3].color, colored::GRAY);
            assert_eq!(rules[4].color, colored::MAGENTA);
        }
    }

    #[test]
    fn test_c_family_shares_one_table() {
        let cpp = rules_for("cpp").as_ptr();
        assert_eq!(rules_for("hpp").as_ptr(), cpp);
        assert_eq!(rules_for("c").as_ptr(), cpp);
        assert_eq!(rules_for("h").as_ptr(), cpp);
    }

    #[test]
    fn test_keyword_word_boundaries() {
        let kw = &rules_for("cpp")[0].pattern;
        assert!(kw.is_match("int x;"));
        assert!(kw.is_match("return 0;"));
        assert!(!kw.is_match("integer x;"));
        assert!(!kw.is_match("printf(x);"));

        let kw = &rules_for("py")[0].pattern;
        assert!(kw.is_match("def foo():"));
        assert!(kw.is_match("x in y"));
        assert!(!kw.is_match("definitely"));
    }

    #[test]
    fn test_string_pattern_matches_through_escapes() {
        let s = &rules_for("py")[1].pattern;
        let m = s.find(r#"x = "a\"b" + y"#).unwrap();
        assert_eq!(m.as_str(), r#""a\"b""#);

        let s = &rules_for("cpp")[1].pattern;
        let m = s.find(r#"puts("say \"hi\"");"#).unwrap();
        assert_eq!(m.as_str(), r#""say \"hi\"""#);
    }

    #[test]
    fn test_comment_pattern_runs_to_end_of_line() {
        let c = &rules_for("cpp")[3].pattern;
        let m = c.find("x = 1; // trailing \"text\" 42").unwrap();
        assert_eq!(m.as_str(), "// trailing \"text\" 42");

        let c = &rules_for("py")[3].pattern;
        let m = c.find("y = 2  # the 'rest' is ignored").unwrap();
        assert_eq!(m.as_str(), "# the 'rest' is ignored");
    }

    #[test]
    fn test_number_pattern() {
        let n = &rules_for("cpp")[4].pattern;
        assert_eq!(n.find("x = 42;").unwrap().as_str(), "42");
        assert_eq!(n.find("y = 3.14;").unwrap().as_str(), "3.14");
        assert!(!n.is_match("x1y"));
    }
}
