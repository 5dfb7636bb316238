//! Shop identity and idea-generation input models.

use crate::Result;
use serde::{Deserialize, Serialize};

/// Market stages a shop can be in, first entry is the default.
pub const STAGES: &[&str] = &["جديد", "في مرحلة النمو", "معروف ومستقر"];

/// A marketing approach the user can pick for idea generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketingType {
    pub name: &'static str,
    pub description: &'static str,
}

/// Catalog of supported marketing approaches. The first entry is the default.
pub const MARKETING_TYPES: &[MarketingType] = &[
    MarketingType {
        name: "تسويق المحتوى (الداخلي)",
        description: "جذب العملاء عبر إنشاء محتوى قيم ومفيد (مقالات، فيديوهات) يجيب على تساؤلاتهم ويبني الثقة.",
    },
    MarketingType {
        name: "تسويق العلاقات",
        description: "التركيز على بناء ولاء طويل الأمد مع العملاء الحاليين عبر برامج المكافآت والخدمة الاستباقية.",
    },
    MarketingType {
        name: "التسويق الفيروسي",
        description: "إنشاء محتوى فريد ومبتكر (مثل التحديات والفيديوهات المفاجئة) يثير الدهشة ويدفع للمشاركة الطوعية.",
    },
    MarketingType {
        name: "التسويق الحسي",
        description: "خلق تجربة غامرة للعلامة التجارية عبر التأثير على الحواس الخمس لتعزيز الذاكرة العاطفية.",
    },
    MarketingType {
        name: "التسويق التجريبي",
        description: "إشراك العملاء في تجارب حية لا تُنسى مثل الفعاليات التفاعلية أو استخدام الواقع المعزز لتجربة المنتجات.",
    },
    MarketingType {
        name: "التسويق عبر المؤثرين",
        description: "التعاون مع شخصيات مؤثرة على وسائل التواصل الاجتماعي لعرض منتجاتك لجمهورهم الموثوق.",
    },
    MarketingType {
        name: "التسويق الأخضر (المستدام)",
        description: "ترويج المنتجات الصديقة للبيئة وإظهار المسؤولية الاجتماعية لعلامتك التجارية.",
    },
    MarketingType {
        name: "التسويق المتخصص (Niche)",
        description: "استهداف شريحة سوق ضيقة ومحددة جداً بمنتجات و رسائل مصممة خصيصًا لهم.",
    },
    MarketingType {
        name: "التسويق القصصي",
        description: "بناء سرد قصصي حول المنتج أو العلامة التجارية لإنشاء اتصال عاطفي مع الجمهور.",
    },
];

/// Look up a marketing type by its exact name.
pub fn marketing_type_by_name(name: &str) -> Option<&'static MarketingType> {
    MARKETING_TYPES.iter().find(|t| t.name == name)
}

/// Identity of the retailer, entered once and reused by every generation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessInfo {
    /// Shop name.
    pub name: String,
    /// Who wears the products.
    pub audience: String,
    /// Market stage, one of [`STAGES`].
    pub stage: String,
    /// General product description.
    pub products: String,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            audience: String::new(),
            stage: STAGES[0].to_string(),
            products: String::new(),
        }
    }
}

impl BusinessInfo {
    /// Check that every field has been filled in.
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "business.name")?;
        require(&self.audience, "business.audience")?;
        require(&self.stage, "business.stage")?;
        require(&self.products, "business.products")?;
        Ok(())
    }
}

/// Whether the user has a marketing budget for the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetChoice {
    Yes,
    No,
}

/// Per-request parameters for idea generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdeaGenerationInfo {
    /// The single product the ideas should market.
    pub product_details: String,
    /// Occasion or event to market around.
    pub event: String,
    /// Selected marketing approach, one of [`MARKETING_TYPES`] by name.
    pub marketing_type: String,
    pub has_budget: BudgetChoice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl Default for IdeaGenerationInfo {
    fn default() -> Self {
        Self {
            product_details: String::new(),
            event: String::new(),
            marketing_type: MARKETING_TYPES[0].name.to_string(),
            has_budget: BudgetChoice::No,
            budget_amount: None,
            additional_info: None,
        }
    }
}

impl IdeaGenerationInfo {
    /// Check required fields. Budget amount and additional info stay optional.
    pub fn validate(&self) -> Result<()> {
        require(&self.product_details, "idea.productDetails")?;
        require(&self.event, "idea.event")?;
        require(&self.marketing_type, "idea.marketingType")?;
        Ok(())
    }

    /// Reset the marketing type to the catalog default if a stored value no
    /// longer matches any catalog entry.
    pub fn normalize_marketing_type(&mut self) {
        if marketing_type_by_name(&self.marketing_type).is_none() {
            self.marketing_type = MARKETING_TYPES[0].name.to_string();
        }
    }
}

pub(crate) fn require(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(crate::Error::Validation(field.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_info_default_stage() {
        let info = BusinessInfo::default();
        assert_eq!(info.stage, "جديد");
    }

    #[test]
    fn test_business_info_validate() {
        let mut info = BusinessInfo {
            name: "أزياء ريم".to_string(),
            audience: "نساء 20-35".to_string(),
            stage: STAGES[1].to_string(),
            products: "فساتين صيفية".to_string(),
        };
        assert!(info.validate().is_ok());

        info.audience = "   ".to_string();
        let err = info.validate().unwrap_err();
        assert!(err.to_string().contains("business.audience"));
    }

    #[test]
    fn test_idea_info_optional_fields_not_required() {
        let info = IdeaGenerationInfo {
            product_details: "فستان سهرة أحمر".to_string(),
            event: "عيد الحب".to_string(),
            ..Default::default()
        };
        assert!(info.validate().is_ok());
    }

    #[test]
    fn test_normalize_unknown_marketing_type() {
        let mut info = IdeaGenerationInfo {
            marketing_type: "نوع قديم غير معروف".to_string(),
            ..Default::default()
        };
        info.normalize_marketing_type();
        assert_eq!(info.marketing_type, MARKETING_TYPES[0].name);
    }

    #[test]
    fn test_budget_choice_serialization() {
        assert_eq!(serde_json::to_string(&BudgetChoice::Yes).unwrap(), "\"yes\"");
        assert_eq!(serde_json::to_string(&BudgetChoice::No).unwrap(), "\"no\"");
    }

    #[test]
    fn test_camel_case_round_trip() {
        let info = BusinessInfo {
            name: "متجر".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"name\""));
        let back: BusinessInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
