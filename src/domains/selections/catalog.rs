//! The selection catalog: one static table driving every message builder.
//!
//! Each UI flow has a closed vocabulary of selection codes and a fixed
//! confirmation string per code. Unknown codes fall back to a generic
//! template that echoes the raw input. Vocabularies are never mutated at
//! runtime.

/// Placeholder replaced by the raw selection code in fallback templates.
const VALUE_TOKEN: &str = "{value}";

/// A single UI flow: its vocabulary and the fallback for unknown codes.
#[derive(Debug)]
pub struct SelectionFlow {
    /// Flow identifier (matches the view it belongs to).
    pub name: &'static str,

    /// Selection code -> exact confirmation string.
    pub vocabulary: &'static [(&'static str, &'static str)],

    /// Template used when the code is not in the vocabulary.
    pub fallback: &'static str,
}

impl SelectionFlow {
    /// Build the confirmation message for a selection code.
    ///
    /// Every input is accepted: codes outside the vocabulary degrade to the
    /// fallback template with the raw code embedded verbatim.
    pub fn message(&self, code: &str) -> String {
        self.vocabulary
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, text)| (*text).to_string())
            .unwrap_or_else(|| self.fallback.replace(VALUE_TOKEN, code))
    }
}

const GENERIC_FALLBACK: &str = "Recibí tu selección: {value}";

/// Income bracket selection (monthly earnings in soles).
pub const RANGE_EARNINGS: SelectionFlow = SelectionFlow {
    name: "range_earnings",
    vocabulary: &[
        (
            "lt_1200",
            "SOLO COMENTA: Elegiste menos de **S/ 1200**. NOTA: no coloques níngun mensaje adicional ni modifiques nada.",
        ),
        (
            "1200_2500",
            "SOLO COMENTA: Elegiste **S/ 1200 - S/ 2500**. NOTA: no coloques níngun mensaje adicional ni modifiques nada.",
        ),
        (
            "2501_5000",
            "SOLO COMENTA: Elegiste **S/ 2501 - S/ 5000**. NOTA: no coloques níngun mensaje adicional ni modifiques nada.",
        ),
        (
            "gt_5000",
            "SOLO COMENTA: Elegiste más de **S/ 5000**. NOTA: no coloques níngun mensaje adicional ni modifiques nada.",
        ),
    ],
    fallback: GENERIC_FALLBACK,
};

/// Card benefit type selection.
pub const BENEFITS: SelectionFlow = SelectionFlow {
    name: "benefits",
    vocabulary: &[
        (
            "cashback",
            "SOLO COMENTA: Elegiste **Cashback**. NOTA: no coloques níngun mensaje adicional ni modifiques nada.",
        ),
        (
            "millas",
            "SOLO COMENTA: Elegiste **Millas**. NOTA: no coloques níngun mensaje adicional ni modifiques nada.",
        ),
        (
            "seguro",
            "SOLO COMENTA: Elegiste **Seguro de compras**. NOTA: no coloques níngun mensaje adicional ni modifiques nada.",
        ),
        (
            "descuentos",
            "SOLO COMENTA: Elegiste **Descuentos**. NOTA: no coloques níngun mensaje adicional ni modifiques nada.",
        ),
    ],
    fallback: GENERIC_FALLBACK,
};

/// Identification document type selection.
pub const IDENTIFICATION: SelectionFlow = SelectionFlow {
    name: "identification",
    vocabulary: &[
        (
            "dni",
            "SOLO COMENTA: Elegiste **DNI**. NOTA: no coloques níngun mensaje adicional ni modifiques nada.",
        ),
        (
            "ce",
            "SOLO COMENTA: Elegiste **Carnet de Extranjería**. NOTA: no coloques níngun mensaje adicional ni modifiques nada.",
        ),
        (
            "pasaporte",
            "SOLO COMENTA: Elegiste **Pasaporte**. NOTA: no coloques níngun mensaje adicional ni modifiques nada.",
        ),
    ],
    fallback: GENERIC_FALLBACK,
};

/// All flows, for discovery and cross-checking against the views.
pub const FLOWS: &[&SelectionFlow] = &[&RANGE_EARNINGS, &BENEFITS, &IDENTIFICATION];

/// Look up a flow by name.
pub fn flow(name: &str) -> Option<&'static SelectionFlow> {
    FLOWS.iter().copied().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_defined_code_returns_its_literal() {
        for flow in FLOWS {
            for (code, expected) in flow.vocabulary {
                assert_eq!(&flow.message(code), expected, "flow {}", flow.name);
            }
        }
    }

    #[test]
    fn test_unknown_code_echoed_verbatim() {
        for flow in FLOWS {
            let msg = flow.message("definitely_not_a_code");
            assert!(
                msg.contains("definitely_not_a_code"),
                "flow {} fallback must embed the raw code: {}",
                flow.name,
                msg
            );
        }
    }

    #[test]
    fn test_empty_code_accepted() {
        let msg = RANGE_EARNINGS.message("");
        assert_eq!(msg, "Recibí tu selección: ");
    }

    #[test]
    fn test_flow_lookup() {
        assert!(flow("range_earnings").is_some());
        assert!(flow("benefits").is_some());
        assert!(flow("identification").is_some());
        assert!(flow("card_dashboard").is_none());
    }

    #[test]
    fn test_range_earnings_exact_strings() {
        assert_eq!(
            RANGE_EARNINGS.message("lt_1200"),
            "SOLO COMENTA: Elegiste menos de **S/ 1200**. NOTA: no coloques níngun mensaje adicional ni modifiques nada."
        );
        assert_eq!(
            RANGE_EARNINGS.message("gt_5000"),
            "SOLO COMENTA: Elegiste más de **S/ 5000**. NOTA: no coloques níngun mensaje adicional ni modifiques nada."
        );
    }

    #[test]
    fn test_flow_names_unique() {
        let mut names: Vec<_> = FLOWS.iter().map(|f| f.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), FLOWS.len());
    }
}
