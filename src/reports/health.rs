//! Status badges and textual alerts
//!
//! Pure threshold checks over one month's figures. Expenses are judged
//! against total revenue (received plus receivable), the balance against
//! zero, and open installments against zero.

use serde::Serialize;

use crate::models::MonthlyRecord;

/// How good or bad a badge or alert is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Within expectations
    Good,
    /// Needs attention soon
    Warning,
    /// Needs attention now
    Critical,
    /// Nothing to report either way
    Neutral,
}

impl Severity {
    /// Symbol shown next to badge and alert text
    pub const fn symbol(&self) -> &'static str {
        match self {
            Severity::Good => "✔",
            Severity::Warning => "◷",
            Severity::Critical => "✘",
            Severity::Neutral => "○",
        }
    }
}

/// Short status label attached to one summary card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Card the badge belongs to (e.g. "Saldo")
    pub card: &'static str,
    /// Badge text (e.g. "SALDO NEGATIVO")
    pub text: &'static str,
    pub severity: Severity,
}

/// One textual alert for the month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: &'static str,
    pub detail: &'static str,
    pub severity: Severity,
}

/// Badges for the five summary cards, in card order
pub fn badges_for(record: &MonthlyRecord) -> Vec<Badge> {
    let revenue_total = record.revenue_total();

    let expenses = if record.expenses > revenue_total {
        Badge {
            card: "Despesas",
            text: "DESPESA > RECEITA",
            severity: Severity::Critical,
        }
    } else {
        Badge {
            card: "Despesas",
            text: "DESPESA OK",
            severity: Severity::Good,
        }
    };

    let receivable = if record.receivable.is_positive() {
        Badge {
            card: "A Receber",
            text: "A RECEBER",
            severity: Severity::Good,
        }
    } else {
        Badge {
            card: "A Receber",
            text: "SEM A RECEBER",
            severity: Severity::Neutral,
        }
    };

    let received = if record.received.is_positive() {
        Badge {
            card: "Recebido",
            text: "RECEBIDO",
            severity: Severity::Good,
        }
    } else {
        Badge {
            card: "Recebido",
            text: "SEM RECEBIMENTOS",
            severity: Severity::Neutral,
        }
    };

    let balance = if record.balance.is_negative() {
        Badge {
            card: "Saldo",
            text: "SALDO NEGATIVO",
            severity: Severity::Critical,
        }
    } else if record.balance.is_positive() {
        Badge {
            card: "Saldo",
            text: "SALDO POSITIVO",
            severity: Severity::Good,
        }
    } else {
        Badge {
            card: "Saldo",
            text: "SALDO ZERO",
            severity: Severity::Neutral,
        }
    };

    let remaining = if record.remaining.is_positive() {
        Badge {
            card: "Restante",
            text: "PARCELAS EM ABERTO",
            severity: Severity::Warning,
        }
    } else {
        Badge {
            card: "Restante",
            text: "SEM PARCELAS",
            severity: Severity::Good,
        }
    };

    vec![expenses, receivable, received, balance, remaining]
}

/// The month's three alerts: expenses vs. revenue, balance sign, open installments
pub fn alerts_for(record: &MonthlyRecord) -> Vec<Alert> {
    let mut alerts = Vec::with_capacity(3);

    if record.expenses > record.revenue_total() {
        alerts.push(Alert {
            title: "Despesa maior que Receita",
            detail: "Reduza gastos ou aumente receita",
            severity: Severity::Critical,
        });
    } else {
        alerts.push(Alert {
            title: "Despesas OK",
            detail: "Dentro da receita total",
            severity: Severity::Good,
        });
    }

    if record.balance.is_negative() {
        alerts.push(Alert {
            title: "Saldo negativo",
            detail: "Atenção aos gastos",
            severity: Severity::Critical,
        });
    } else if record.balance.is_positive() {
        alerts.push(Alert {
            title: "Saldo positivo",
            detail: "Controle OK",
            severity: Severity::Good,
        });
    } else {
        alerts.push(Alert {
            title: "Saldo zerado",
            detail: "Sem sobra no mês",
            severity: Severity::Neutral,
        });
    }

    if record.remaining.is_positive() {
        alerts.push(Alert {
            title: "Parcelas em aberto",
            detail: "Há valores pendentes",
            severity: Severity::Warning,
        });
    } else {
        alerts.push(Alert {
            title: "Sem parcelas em aberto",
            detail: "Tudo em dia",
            severity: Severity::Good,
        });
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn record(expenses: i64, receivable: i64, received: i64, balance: i64, remaining: i64) -> MonthlyRecord {
        MonthlyRecord {
            month: "Jan".into(),
            expenses: Money::from_cents(expenses),
            receivable: Money::from_cents(receivable),
            received: Money::from_cents(received),
            balance: Money::from_cents(balance),
            remaining: Money::from_cents(remaining),
        }
    }

    fn badge_text(record: &MonthlyRecord, card: &str) -> &'static str {
        badges_for(record)
            .into_iter()
            .find(|b| b.card == card)
            .unwrap()
            .text
    }

    #[test]
    fn test_expenses_badge_against_total_revenue() {
        // 150 expenses vs 100 + 40 revenue
        let r = record(15_000, 10_000, 4_000, 0, 0);
        assert_eq!(badge_text(&r, "Despesas"), "DESPESA > RECEITA");

        // Equal is still OK, the badge only fires on strictly greater
        let r = record(14_000, 10_000, 4_000, 0, 0);
        assert_eq!(badge_text(&r, "Despesas"), "DESPESA OK");
    }

    #[test]
    fn test_balance_badge_three_states() {
        assert_eq!(badge_text(&record(0, 0, 0, -100, 0), "Saldo"), "SALDO NEGATIVO");
        assert_eq!(badge_text(&record(0, 0, 0, 100, 0), "Saldo"), "SALDO POSITIVO");
        assert_eq!(badge_text(&record(0, 0, 0, 0, 0), "Saldo"), "SALDO ZERO");
    }

    #[test]
    fn test_receivable_and_received_badges() {
        let r = record(0, 5_000, 0, 0, 0);
        assert_eq!(badge_text(&r, "A Receber"), "A RECEBER");
        assert_eq!(badge_text(&r, "Recebido"), "SEM RECEBIMENTOS");

        let r = record(0, 0, 5_000, 0, 0);
        assert_eq!(badge_text(&r, "A Receber"), "SEM A RECEBER");
        assert_eq!(badge_text(&r, "Recebido"), "RECEBIDO");
    }

    #[test]
    fn test_remaining_badge() {
        assert_eq!(
            badge_text(&record(0, 0, 0, 0, 100), "Restante"),
            "PARCELAS EM ABERTO"
        );
        assert_eq!(badge_text(&record(0, 0, 0, 0, 0), "Restante"), "SEM PARCELAS");
    }

    #[test]
    fn test_alerts_cover_the_three_checks() {
        let alerts = alerts_for(&record(15_000, 5_000, 5_000, -100, 200));
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].title, "Despesa maior que Receita");
        assert_eq!(alerts[0].severity, Severity::Critical);
        assert_eq!(alerts[1].title, "Saldo negativo");
        assert_eq!(alerts[2].title, "Parcelas em aberto");
        assert_eq!(alerts[2].severity, Severity::Warning);
    }

    #[test]
    fn test_alerts_all_clear() {
        let alerts = alerts_for(&record(5_000, 5_000, 5_000, 100, 0));
        assert!(alerts.iter().all(|a| a.severity == Severity::Good));
    }

    #[test]
    fn test_zero_balance_alert_is_neutral() {
        let alerts = alerts_for(&record(0, 0, 0, 0, 0));
        assert_eq!(alerts[1].title, "Saldo zerado");
        assert_eq!(alerts[1].severity, Severity::Neutral);
    }
}
