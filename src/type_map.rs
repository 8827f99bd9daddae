//! Abstract field type to target language type mapping.
//!
//! One static table per target language. Lookup of the abstract type is
//! case-insensitive; a type with no entry is echoed back verbatim so custom
//! types still produce output.

use serde::Serialize;

/// Target language whose primitive type names a field maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    Python,
    TypeScript,
    Php,
    Java,
    CSharp,
    Kotlin,
    Swift,
    Dart,
}

/// Broad grouping of target languages by runtime model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFamily {
    /// Dynamically typed scripting runtimes
    Scripting,
    /// Statically typed JIT/managed runtimes
    Managed,
    /// Ahead-of-time compiled
    Compiled,
    /// Mobile/UI toolkits
    Mobile,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 8] = [
        TargetLanguage::Python,
        TargetLanguage::TypeScript,
        TargetLanguage::Php,
        TargetLanguage::Java,
        TargetLanguage::CSharp,
        TargetLanguage::Kotlin,
        TargetLanguage::Swift,
        TargetLanguage::Dart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::Python => "python",
            TargetLanguage::TypeScript => "typescript",
            TargetLanguage::Php => "php",
            TargetLanguage::Java => "java",
            TargetLanguage::CSharp => "csharp",
            TargetLanguage::Kotlin => "kotlin",
            TargetLanguage::Swift => "swift",
            TargetLanguage::Dart => "dart",
        }
    }

    /// Parse a language name as used in templates (`python`, `csharp`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(name))
    }

    pub fn family(&self) -> TypeFamily {
        match self {
            TargetLanguage::Python | TargetLanguage::TypeScript | TargetLanguage::Php => {
                TypeFamily::Scripting
            }
            TargetLanguage::Java | TargetLanguage::CSharp | TargetLanguage::Kotlin => {
                TypeFamily::Managed
            }
            TargetLanguage::Swift => TypeFamily::Compiled,
            TargetLanguage::Dart => TypeFamily::Mobile,
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            TargetLanguage::Python => PYTHON,
            TargetLanguage::TypeScript => TYPESCRIPT,
            TargetLanguage::Php => PHP,
            TargetLanguage::Java => JAVA,
            TargetLanguage::CSharp => CSHARP,
            TargetLanguage::Kotlin => KOTLIN,
            TargetLanguage::Swift => SWIFT,
            TargetLanguage::Dart => DART,
        }
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an abstract field type to the type name used in `language`.
pub fn map_type(abstract_type: &str, language: TargetLanguage) -> String {
    let key = abstract_type.to_ascii_lowercase();
    language
        .table()
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, mapped)| (*mapped).to_string())
        .unwrap_or_else(|| abstract_type.to_string())
}

/// A sample literal for an abstract type, for docs and fixtures in generated code.
pub fn example_value(abstract_type: &str) -> serde_json::Value {
    use serde_json::json;
    match abstract_type.to_ascii_lowercase().as_str() {
        "string" => json!("example_string"),
        "integer" => json!(1),
        "float" | "decimal" => json!(1.0),
        "boolean" => json!(true),
        "datetime" => json!("2024-01-01T00:00:00Z"),
        "date" => json!("2024-01-01"),
        "text" => json!("Example text content"),
        "json" => json!({}),
        "array" => json!([]),
        "uuid" => json!("00000000-0000-0000-0000-000000000000"),
        _ => serde_json::Value::Null,
    }
}

const PYTHON: &[(&str, &str)] = &[
    ("string", "str"),
    ("integer", "int"),
    ("float", "float"),
    ("boolean", "bool"),
    ("datetime", "datetime"),
    ("date", "date"),
    ("text", "str"),
    ("json", "dict"),
    ("array", "list"),
    ("uuid", "UUID"),
    ("decimal", "Decimal"),
];

const TYPESCRIPT: &[(&str, &str)] = &[
    ("string", "string"),
    ("integer", "number"),
    ("float", "number"),
    ("boolean", "boolean"),
    ("datetime", "Date"),
    ("date", "Date"),
    ("text", "string"),
    ("json", "any"),
    ("array", "Array<any>"),
    ("uuid", "string"),
    ("decimal", "number"),
];

const PHP: &[(&str, &str)] = &[
    ("string", "string"),
    ("integer", "int"),
    ("float", "float"),
    ("boolean", "bool"),
    ("datetime", "\\DateTime"),
    ("date", "\\DateTime"),
    ("text", "string"),
    ("json", "array"),
    ("array", "array"),
    ("uuid", "string"),
    ("decimal", "string"),
];

const JAVA: &[(&str, &str)] = &[
    ("string", "String"),
    ("integer", "Integer"),
    ("float", "Double"),
    ("boolean", "Boolean"),
    ("datetime", "LocalDateTime"),
    ("date", "LocalDate"),
    ("text", "String"),
    ("json", "JsonNode"),
    ("array", "List<Object>"),
    ("uuid", "UUID"),
    ("decimal", "BigDecimal"),
];

const CSHARP: &[(&str, &str)] = &[
    ("string", "string"),
    ("integer", "int"),
    ("float", "double"),
    ("boolean", "bool"),
    ("datetime", "DateTime"),
    ("date", "DateTime"),
    ("text", "string"),
    ("json", "JsonElement"),
    ("array", "List<object>"),
    ("uuid", "Guid"),
    ("decimal", "decimal"),
];

const KOTLIN: &[(&str, &str)] = &[
    ("string", "String"),
    ("integer", "Int"),
    ("float", "Double"),
    ("boolean", "Boolean"),
    ("datetime", "LocalDateTime"),
    ("date", "LocalDate"),
    ("text", "String"),
    ("json", "JsonObject"),
    ("array", "List<Any>"),
    ("uuid", "UUID"),
    ("decimal", "BigDecimal"),
];

const SWIFT: &[(&str, &str)] = &[
    ("string", "String"),
    ("integer", "Int"),
    ("float", "Double"),
    ("boolean", "Bool"),
    ("datetime", "Date"),
    ("date", "Date"),
    ("text", "String"),
    ("json", "[String: Any]"),
    ("array", "[Any]"),
    ("uuid", "UUID"),
    ("decimal", "Decimal"),
];

const DART: &[(&str, &str)] = &[
    ("string", "String"),
    ("integer", "int"),
    ("float", "double"),
    ("boolean", "bool"),
    ("datetime", "DateTime"),
    ("date", "DateTime"),
    ("text", "String"),
    ("json", "Map<String, dynamic>"),
    ("array", "List<dynamic>"),
    ("uuid", "String"),
    ("decimal", "double"),
];
