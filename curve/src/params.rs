//! Domain parameter configuration.
//!
//! Parameters are carried as hexadecimal strings so they can be loaded from
//! configuration files and compared against published tables.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::{AffinePoint, CurveError, CurveGroup};

// GOST R 34.10 worked example, 256-bit case: y^2 = x^3 + 7x + b over p = 2^255 + 0x431
const EXAMPLE_256_P: &str = "8000000000000000000000000000000000000000000000000000000000000431";
const EXAMPLE_256_A: &str = "7";
const EXAMPLE_256_B: &str = "5FBFF498AA938CE739B8E022FBAFEF40563F6E6A3472FC2A514C0CE9DAE23B7E";
const EXAMPLE_256_Q: &str = "8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3";
const EXAMPLE_256_PX: &str = "2";
const EXAMPLE_256_PY: &str = "08E2A8A0E65147D4BD6316030E16D19C85C97F0A9CA267122B96ABBCEA7E8FC8";

// GOST R 34.10 worked example, 512-bit case: y^2 = x^3 + 7x + b, p and q of 511 bits
const EXAMPLE_512_P: &str = "4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15D\
                             F1D852741AF4704A0458047E80E4546D35B8336FAC224DD81664BBF528BE6373";
const EXAMPLE_512_A: &str = "7";
const EXAMPLE_512_B: &str = "1CFF0806A31116DA29D8CFA54E57EB748BC5F377E49400FDD788B649ECA1AC43\
                             61834013B2AD7322480A89CA58E0CF74BC9E540C2ADD6897FAD0A3084F302ADC";
const EXAMPLE_512_Q: &str = "4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15D\
                             A82F2D7ECB1DBAC719905C5EECC423F1D86E25EDBE23C595D644AAF187E6E6DF";
const EXAMPLE_512_PX: &str = "24D19CC64572EE30F396BF6EBBFD7A6C5213B3B3D7057CC825F91093A68CD762\
                              FD60611262CD838DC6B60AA7EEE804E28BC849977FAC33B4B530F1B120248A9A";
const EXAMPLE_512_PY: &str = "2BB312A43BD2CE6E0D020613C857ACDDCFBF061E91E5F2C3F32447C259F39B2C\
                              83AB156D77F1496BF7EB3351E1EE4E43DC1A18B91B24640B6DBB92CB1ADD371E";

/// Curve domain parameters in hexadecimal form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainParams {
    pub p: String,
    pub a: String,
    pub b: String,
    pub m: String,
    pub q: String,
    pub px: String,
    pub py: String,
}

impl DomainParams {
    /// The 256-bit worked example of GOST R 34.10 (cofactor 1, so `m = q`).
    pub fn gost_example_256() -> Self {
        DomainParams {
            p: EXAMPLE_256_P.to_owned(),
            a: EXAMPLE_256_A.to_owned(),
            b: EXAMPLE_256_B.to_owned(),
            m: EXAMPLE_256_Q.to_owned(),
            q: EXAMPLE_256_Q.to_owned(),
            px: EXAMPLE_256_PX.to_owned(),
            py: EXAMPLE_256_PY.to_owned(),
        }
    }

    /// The 512-bit worked example of GOST R 34.10 (cofactor 1, so `m = q`).
    pub fn gost_example_512() -> Self {
        DomainParams {
            p: EXAMPLE_512_P.to_owned(),
            a: EXAMPLE_512_A.to_owned(),
            b: EXAMPLE_512_B.to_owned(),
            m: EXAMPLE_512_Q.to_owned(),
            q: EXAMPLE_512_Q.to_owned(),
            px: EXAMPLE_512_PX.to_owned(),
            py: EXAMPLE_512_PY.to_owned(),
        }
    }

    /// Parse the parameters into a [`CurveGroup`].
    ///
    /// Only the encoding is checked; the values themselves are trusted.
    pub fn build(&self) -> Result<CurveGroup, CurveError> {
        let base = AffinePoint::new(parse_hex("px", &self.px)?, parse_hex("py", &self.py)?);
        Ok(CurveGroup::new(
            parse_hex("p", &self.p)?,
            parse_hex("a", &self.a)?,
            parse_hex("b", &self.b)?,
            parse_hex("m", &self.m)?,
            parse_hex("q", &self.q)?,
            base,
        ))
    }
}

fn parse_hex(field: &'static str, value: &str) -> Result<BigUint, CurveError> {
    let digits = value.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or(CurveError::InvalidHex { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_curve_base_on_curve() {
        let curve = DomainParams::gost_example_256().build().expect("valid params");
        assert!(curve.contains(curve.base()));
        assert_eq!(curve.p().bits(), 256);
        assert_eq!(curve.q().bits(), 256);
    }

    #[test]
    fn test_example_curve_base_has_order_q() {
        let curve = DomainParams::gost_example_256().build().expect("valid params");
        assert_eq!(curve.mul_base(curve.q()), AffinePoint::IDENTITY);
    }

    #[test]
    fn test_example_512_curve() {
        let curve = DomainParams::gost_example_512().build().expect("valid params");
        assert!(curve.contains(curve.base()));
        assert_eq!(curve.p().bits(), 511);
        assert_eq!(curve.q().bits(), 511);
        assert_eq!(curve.mul_base(curve.q()), AffinePoint::IDENTITY);
    }

    #[test]
    fn test_prefix_and_whitespace_accepted() {
        assert_eq!(parse_hex("p", " 0x1F "), Ok(BigUint::from(31u32)));
        assert_eq!(parse_hex("p", "0Xff"), Ok(BigUint::from(255u32)));
    }

    #[test]
    fn test_invalid_hex_names_field() {
        let mut params = DomainParams::gost_example_256();
        params.b = "not hex".to_owned();
        assert_eq!(params.build(), Err(CurveError::InvalidHex { field: "b" }));

        params = DomainParams::gost_example_256();
        params.q = String::new();
        assert_eq!(params.build(), Err(CurveError::InvalidHex { field: "q" }));
    }
}
