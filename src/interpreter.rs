/// The evaluator module computes the value of a parsed program.
///
/// The evaluator walks the syntax tree left to right, applies checked integer
/// arithmetic, and renders the results in the language's output format.
///
/// # Responsibilities
/// - Evaluates every node of the tree exactly once.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw character stream and produces one token per call:
/// integer literals, operators, delimiters and the end-of-input marker. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Skips whitespace and recognizes every token of the language.
/// - Carries integer literal values inline in their tokens.
/// - Reports lexical errors for invalid characters and failed reads.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a predictive, single-lookahead recursive-descent parser.
/// Every production is picked from the current token alone.
///
/// # Responsibilities
/// - Converts tokens into the nodes of [`crate::ast`].
/// - Reports the expected and actual token on syntax errors.
pub mod parser;
