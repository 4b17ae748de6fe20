use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

/// How operators of equal precedence group when chained.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// The fixed properties of a single operator symbol.
#[derive(Debug)]
pub struct OperatorDescriptor {
    pub symbol: char,
    pub precedence: u8,
    pub associativity: Associativity,
    pub function: fn(f64, f64) -> f64,
}

/// Process-wide operator table, indexed by the discriminant of [`BinaryOperator`].
pub static OPERATORS: [OperatorDescriptor; 5] = [
    OperatorDescriptor {
        symbol: '+',
        precedence: 2,
        associativity: Associativity::Left,
        function: add,
    },
    OperatorDescriptor {
        symbol: '-',
        precedence: 2,
        associativity: Associativity::Left,
        function: subtract,
    },
    OperatorDescriptor {
        symbol: '*',
        precedence: 3,
        associativity: Associativity::Left,
        function: multiply,
    },
    OperatorDescriptor {
        symbol: '/',
        precedence: 3,
        associativity: Associativity::Left,
        function: divide,
    },
    OperatorDescriptor {
        symbol: '^',
        precedence: 4,
        associativity: Associativity::Right,
        function: f64::powf,
    },
];

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

// IEEE-754 semantics: a zero divisor yields an infinity or NaN.
fn divide(a: f64, b: f64) -> f64 {
    a / b
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 5] = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
        BinaryOperator::Exponentiate,
    ];

    /// Looks up the operator written as `symbol`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_calculator::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('^'), Some(BinaryOperator::Exponentiate));
    /// assert_eq!(BinaryOperator::from_symbol('&'), None);
    /// ```
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        BinaryOperator::ALL
            .into_iter()
            .find(|operator| operator.symbol() == symbol)
    }

    pub fn descriptor(&self) -> &'static OperatorDescriptor {
        &OPERATORS[*self as usize]
    }

    pub fn symbol(&self) -> char {
        self.descriptor().symbol
    }

    pub fn associativity(&self) -> Associativity {
        self.descriptor().associativity
    }

    pub fn precedence(&self) -> u8 {
        self.descriptor().precedence
    }

    pub fn precedence_lt(&self, other: &Self) -> bool {
        self.precedence().lt(&other.precedence())
    }

    pub fn precedence_le(&self, other: &Self) -> bool {
        self.precedence().le(&other.precedence())
    }

    /// Applies the operator with `a` as the left-hand and `b` as the right-hand operand.
    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        (self.descriptor().function)(a, b)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
