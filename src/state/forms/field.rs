//! Form field value objects

/// Names of the loan form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    LoanStartDate,
    LoanEndDate,
    FirstPaymentDate,
    PrincipalAmount,
    InterestRate,
}

impl FieldName {
    /// All fields in on-screen order
    pub const ALL: [FieldName; 5] = [
        FieldName::LoanStartDate,
        FieldName::LoanEndDate,
        FieldName::FirstPaymentDate,
        FieldName::PrincipalAmount,
        FieldName::InterestRate,
    ];

    /// Name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoanStartDate => "loanStartDate",
            Self::LoanEndDate => "loanEndDate",
            Self::FirstPaymentDate => "firstPaymentDate",
            Self::PrincipalAmount => "principalAmount",
            Self::InterestRate => "interestRate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::LoanStartDate => "Data Inicial",
            Self::LoanEndDate => "Data Final",
            Self::FirstPaymentDate => "Primeiro Pagamento",
            Self::PrincipalAmount => "Valor do Empréstimo (R$)",
            Self::InterestRate => "Taxa de Juros (%)",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::LoanStartDate | Self::LoanEndDate | Self::FirstPaymentDate => FieldKind::Date,
            Self::PrincipalAmount | Self::InterestRate => FieldKind::Decimal,
        }
    }
}

/// Kind of input a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// ISO date typed as `YYYY-MM-DD`
    Date,
    /// Non-negative decimal number
    Decimal,
}

/// Maximum length of a date field (`YYYY-MM-DD`)
const DATE_LEN: usize = 10;

impl FieldKind {
    /// Placeholder shown when the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Date => "AAAA-MM-DD",
            Self::Decimal => "0.00",
        }
    }

    /// Whether `c` may be appended to `current`
    pub fn accepts(&self, current: &str, c: char) -> bool {
        match self {
            Self::Date => (c.is_ascii_digit() || c == '-') && current.len() < DATE_LEN,
            Self::Decimal => c.is_ascii_digit() || (c == '.' && !current.contains('.')),
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub value: String,
}

impl FormField {
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    pub fn kind(&self) -> FieldKind {
        self.name.kind()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value.
    /// Returns false when the field kind rejects the character.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.kind().accepts(&self.value, c) {
            self.value.push(c);
            true
        } else {
            false
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) -> bool {
        self.value.pop().is_some()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        &self.value
    }
}
