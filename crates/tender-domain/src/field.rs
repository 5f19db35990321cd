//! Extraction schema: field definitions and hint text
//!
//! The schema is fixed at construction time. Changing the extracted fields is
//! a deployment-time decision, not a runtime one, so nothing here exposes
//! mutation after `FieldSchema` is built.

/// One named attribute of interest in a tender document.
///
/// A field carries keyword hints (terms that typically label the value in
/// the source document) and a free-text extraction rule. Both feed directly
/// into the prompt the extraction pass sends to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenderField {
    /// Field name, unique within the schema. Doubles as the heading in the
    /// output record.
    pub name: String,

    /// Keywords that typically label this field in tender documents
    pub keywords: Vec<String>,

    /// Free-text instruction telling the model what to extract
    pub extraction_rule: String,
}

impl TenderField {
    /// Create a new field definition
    pub fn new(
        name: impl Into<String>,
        keywords: &[&str],
        extraction_rule: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            extraction_rule: extraction_rule.into(),
        }
    }
}

/// The fixed, ordered set of fields the pipeline extracts.
///
/// Iteration order is definition order, and the order of rows in the output
/// record follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    fields: Vec<TenderField>,
}

impl FieldSchema {
    /// Build a schema from an ordered list of fields
    pub fn new(fields: Vec<TenderField>) -> Self {
        Self { fields }
    }

    /// The standard tender-analysis schema: project name, issuing agency,
    /// bid type, CMS requirement, and requirement summary.
    pub fn standard() -> Self {
        Self::new(vec![
            TenderField::new(
                "案件名",
                &["案件名", "件名", "調達案件名", "業務名", "事業名"],
                "プロジェクト名や業務内容を端的に表現している部分を抽出してください",
            ),
            TenderField::new(
                "発注機関",
                &["発注機関", "契約担当官", "支出負担行為担当官", "調達機関"],
                "省庁名、部署名、組織名などを含む正式名称を抽出してください",
            ),
            TenderField::new(
                "入札の種類",
                &["入札方式", "入札区分", "調達方式", "契約方式"],
                "一般競争入札、指名競争入札、総合評価落札方式などの入札方式を特定してください",
            ),
            TenderField::new(
                "CMSの有無",
                &["CMS", "コンテンツ管理システム", "WordPress", "コンテンツマネジメントシステム"],
                "システム要件からCMSの必要性を判断し、「有」「無」で回答してください",
            ),
            TenderField::new(
                "要件概要",
                &["業務概要", "案件概要", "調達概要", "業務内容", "仕様概要"],
                "以下の点を必ず含めて要約してください：\n\
                 1. プロジェクトの目的\n\
                 2. 主要な開発・導入項目\n\
                 3. 特記すべき技術要件\n\
                 4. 保守・運用に関する要件",
            ),
        ])
    }

    /// Ordered field definitions
    pub fn fields(&self) -> &[TenderField] {
        &self.fields
    }

    /// Ordered field names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of fields in the schema
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the schema has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True if a field with this name is part of the schema
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::standard()
    }
}
