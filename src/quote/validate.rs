//! Boundary range validation for quote requests
//!
//! Runs once before the engine; the engine never sees out-of-domain values.

use thiserror::Error;

use super::CalcRequest;

/// A field outside its declared domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be greater than 0 (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::Negative { field, value })
    }
}

fn require_in_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

impl CalcRequest {
    /// Check every field against its declared domain.
    ///
    /// Returns the first violation found; callers reject the request before
    /// invoking the engine.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_positive("consumo_annuo_kwh", self.consumo_annuo_kwh)?;
        require_positive("prezzo_energia_eur_kwh", self.prezzo_energia_eur_kwh)?;
        require_non_negative("quota_fissa_annua_eur", self.quota_fissa_annua_eur)?;

        require_positive("costo_impianto_eur", self.costo_impianto_eur)?;
        if let Some(costo_finanziato) = self.costo_finanziato_eur {
            require_non_negative("costo_finanziato_eur", costo_finanziato)?;
        }
        require_in_range(
            "anni_finanziamento",
            self.anni_finanziamento as f64,
            1.0,
            30.0,
        )?;
        require_non_negative("taeg_annuo_percent", self.taeg_annuo_percent)?;

        require_positive("produzione_annua_kwh", self.produzione_annua_kwh)?;
        require_in_range("autoconsumo_percent", self.autoconsumo_percent, 0.0, 100.0)?;
        require_non_negative("prezzo_gse_eur_kwh", self.prezzo_gse_eur_kwh)?;

        require_in_range(
            "aliquota_detrazione_percent",
            self.aliquota_detrazione_percent,
            0.0,
            100.0,
        )?;
        require_in_range("anni_detrazione", self.anni_detrazione as f64, 1.0, 20.0)?;

        require_in_range("fattore_prudenza", self.fattore_prudenza, 0.5, 1.2)?;
        if let Some(rata_override) = self.rata_mensile_override_eur {
            require_non_negative("rata_mensile_override_eur", rata_override)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CalcRequest {
        serde_json::from_str(
            r#"{
                "consumo_annuo_kwh": 3000,
                "costo_impianto_eur": 8000,
                "produzione_annua_kwh": 4000
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn test_consumption_must_be_positive() {
        let mut request = valid_request();
        request.consumo_annuo_kwh = 0.0;
        assert_eq!(
            request.validate(),
            Err(ValidationError::NotPositive {
                field: "consumo_annuo_kwh",
                value: 0.0,
            })
        );
    }

    #[test]
    fn test_negative_fixed_fee_rejected() {
        let mut request = valid_request();
        request.quota_fissa_annua_eur = -1.0;
        assert_eq!(
            request.validate(),
            Err(ValidationError::Negative {
                field: "quota_fissa_annua_eur",
                value: -1.0,
            })
        );
    }

    #[test]
    fn test_financing_term_bounds() {
        let mut request = valid_request();
        request.anni_finanziamento = 0;
        assert!(request.validate().is_err());

        request.anni_finanziamento = 31;
        assert_eq!(
            request.validate(),
            Err(ValidationError::OutOfRange {
                field: "anni_finanziamento",
                min: 1.0,
                max: 30.0,
                value: 31.0,
            })
        );

        request.anni_finanziamento = 30;
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn test_percentage_bounds() {
        let mut request = valid_request();
        request.autoconsumo_percent = 100.5;
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.aliquota_detrazione_percent = -0.1;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_prudence_factor_bounds() {
        let mut request = valid_request();
        request.fattore_prudenza = 0.4;
        assert!(request.validate().is_err());

        request.fattore_prudenza = 1.3;
        assert!(request.validate().is_err());

        request.fattore_prudenza = 0.5;
        assert_eq!(request.validate(), Ok(()));
        request.fattore_prudenza = 1.2;
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn test_optional_fields_checked_when_present() {
        let mut request = valid_request();
        request.costo_finanziato_eur = Some(-100.0);
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.rata_mensile_override_eur = Some(-1.0);
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.costo_finanziato_eur = Some(0.0);
        request.rata_mensile_override_eur = Some(0.0);
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn test_deduction_period_bounds() {
        let mut request = valid_request();
        request.anni_detrazione = 21;
        assert!(request.validate().is_err());

        request.anni_detrazione = 20;
        assert_eq!(request.validate(), Ok(()));
    }
}
