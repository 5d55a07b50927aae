//! Static string tables for rendering results in Dutch or English

use std::str::FromStr;

use crate::error::LoanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Dutch,
    English,
}

impl Language {
    /// Pick the language from a locale tag such as `nl-NL` or `en_GB`
    pub fn from_locale(locale: &str) -> Result<Self, LoanError> {
        let primary = locale.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "nl" => Ok(Language::Dutch),
            "en" => Ok(Language::English),
            _ => Err(LoanError::UnknownLanguage(locale.to_string())),
        }
    }

    /// Default display locale for number formatting
    pub fn locale(&self) -> &'static str {
        match self {
            Language::Dutch => "nl-NL",
            Language::English => "en-US",
        }
    }
}

impl FromStr for Language {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_locale(s)
    }
}

/// Labels used when presenting a schedule
#[derive(Debug)]
pub struct Translations {
    pub title: &'static str,
    pub parameters: &'static str,
    pub results: &'static str,
    pub loan_amount: &'static str,
    pub interest_rate: &'static str,
    pub duration: &'static str,
    pub inflation: &'static str,
    pub deduction_years: &'static str,
    pub tax_rate: &'static str,
    pub metric: &'static str,
    pub nominal: &'static str,
    pub real: &'static str,
    pub total_paid: &'static str,
    pub extra_costs_total: &'static str,
    pub extra_costs_monthly: &'static str,
    pub yearly_overview: &'static str,
    pub year: &'static str,
    pub month: &'static str,
    pub repayment: &'static str,
    pub net_interest: &'static str,
    pub deduction_benefit: &'static str,
    pub cumulative_inflation: &'static str,
    pub mortgage_type: &'static str,
    pub annuity: &'static str,
    pub linear: &'static str,
    pub first_monthly_payment: &'static str,
    pub investment_account_balance: &'static str,
    pub investment_account_simulation: &'static str,
    pub comparison_with_linear: &'static str,
    pub difference: &'static str,
    pub return_label: &'static str,
    pub tax: &'static str,
    pub balance: &'static str,
    pub disclaimer: &'static str,
}

pub static DUTCH: Translations = Translations {
    title: "Hypotheek Calculator",
    parameters: "Parameters",
    results: "Resultaat",
    loan_amount: "Lening bedrag",
    interest_rate: "Rente (%)",
    duration: "Looptijd (jaren)",
    inflation: "Inflatie (%)",
    deduction_years: "HRA jaren",
    tax_rate: "Belastingtarief (%)",
    metric: "Metric",
    nominal: "Nominaal",
    real: "Reëel",
    total_paid: "Totaal betaald",
    extra_costs_total: "Extra kosten totaal",
    extra_costs_monthly: "Extra kosten per maand",
    yearly_overview: "Jaarlijkse overzicht",
    year: "Jaar",
    month: "maand",
    repayment: "Aflossing",
    net_interest: "Rente netto",
    deduction_benefit: "HRA voordeel",
    cumulative_inflation: "Cumulatieve inflatie",
    mortgage_type: "Hypotheektype",
    annuity: "Annuïteit",
    linear: "Lineair",
    first_monthly_payment: "Eerste maandlast",
    investment_account_balance: "Beleggingsrekening saldo",
    investment_account_simulation: "Beleggingsrekening simulatie",
    comparison_with_linear: "Vergelijking met lineaire hypotheek",
    difference: "Verschil",
    return_label: "Rendement",
    tax: "Belasting",
    balance: "Saldo",
    disclaimer: "DISCLAIMER: Dit is geen financieel advies. Deze berekening is uitsluitend \
                 bedoeld voor educatieve en informatieve doeleinden. De resultaten zijn \
                 hypothetisch en de nauwkeurigheid wordt niet gegarandeerd.",
};

pub static ENGLISH: Translations = Translations {
    title: "Mortgage Calculator",
    parameters: "Parameters",
    results: "Results",
    loan_amount: "Loan amount",
    interest_rate: "Interest rate (%)",
    duration: "Duration (years)",
    inflation: "Inflation (%)",
    deduction_years: "MID years",
    tax_rate: "Tax rate (%)",
    metric: "Metric",
    nominal: "Nominal",
    real: "Real",
    total_paid: "Total paid",
    extra_costs_total: "Extra costs total",
    extra_costs_monthly: "Extra costs monthly",
    yearly_overview: "Yearly overview",
    year: "Year",
    month: "month",
    repayment: "Repayment",
    net_interest: "Net interest",
    deduction_benefit: "MID benefit",
    cumulative_inflation: "Cumulative inflation",
    mortgage_type: "Mortgage type",
    annuity: "Annuity",
    linear: "Linear",
    first_monthly_payment: "First monthly payment",
    investment_account_balance: "Investment account balance",
    investment_account_simulation: "Investment account simulation",
    comparison_with_linear: "Comparison with linear mortgage",
    difference: "Difference",
    return_label: "Return",
    tax: "Tax",
    balance: "Balance",
    disclaimer: "DISCLAIMER: This is not financial advice. This calculation is intended \
                 solely for educational and informational purposes. The results are \
                 hypothetical and accuracy is not guaranteed.",
};

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::Dutch => &DUTCH,
        Language::English => &ENGLISH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_locale() {
        assert_eq!(Language::from_locale("nl-NL").unwrap(), Language::Dutch);
        assert_eq!(Language::from_locale("en_GB").unwrap(), Language::English);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert!(Language::from_locale("de-DE").is_err());
    }

    #[test]
    fn test_translations_selected() {
        assert_eq!(translations(Language::Dutch).title, "Hypotheek Calculator");
        assert_eq!(translations(Language::English).annuity, "Annuity");
        assert_eq!(Language::English.locale(), "en-US");
        assert_eq!(translations(Language::Dutch).cumulative_inflation, "Cumulatieve inflatie");
    }
}
