use serde::Deserialize;

/// Body for both create and update; all fields are required.
#[derive(Debug, Deserialize)]
pub struct PackageBody {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl PackageBody {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Package name must not be empty");
        }
        if self.price < 0.0 {
            return Err("Package price must not be negative");
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name() {
        let body = PackageBody {
            name: "   ".into(),
            description: "d".into(),
            price: 10.0,
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn rejects_negative_price() {
        let body = PackageBody {
            name: "Super Seru".into(),
            description: "d".into(),
            price: -1.0,
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn accepts_valid_body() {
        let body = PackageBody {
            name: "Super Seru".into(),
            description: "d".into(),
            price: 120_000.0,
        };
        assert!(body.validate().is_ok());
    }
}
