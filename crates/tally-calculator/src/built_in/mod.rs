//! Built-in operations provided by the Tally calculator.

// Arithmetic operations
pub mod add;
pub mod divide;
pub mod multiply;
pub mod subtract;

// Exponentiation
pub mod power;

pub use add::AddOperation;
pub use divide::DivideOperation;
pub use multiply::MultiplyOperation;
pub use power::PowerOperation;
pub use subtract::SubtractOperation;
