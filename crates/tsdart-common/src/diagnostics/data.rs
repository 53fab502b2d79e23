use super::{DiagnosticCategory, DiagnosticMessage};

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    diagnostic_messages::INDEX_SIGNATURE_MUST_HAVE_EXACTLY_ONE_PARAMETER_FOUND,
    diagnostic_messages::EXPECTED_A_SINGLE_PARAMETER_INDEX_SIGNATURE_TYPE_LITERAL_ON_AN_OBJECT_LITERAL,
    diagnostic_messages::INDEX_SIGNATURE_IS_MISSING_A_TYPE_ANNOTATION,
    diagnostic_messages::TYPE_HAS_NO_FAITHFUL_DART_EQUIVALENT_AND_WAS_TRANSLATED_TO_DYNAMIC,
    diagnostic_messages::TYPE_NESTING_EXCEEDS_THE_MAXIMUM_DEPTH_OF_TRANSLATED_TO_DYNAMIC,
];

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const INDEX_SIGNATURE_MUST_HAVE_EXACTLY_ONE_PARAMETER_FOUND: DiagnosticMessage =
        DiagnosticMessage {
            code: diagnostic_codes::INDEX_SIGNATURE_MUST_HAVE_EXACTLY_ONE_PARAMETER_FOUND,
            category: DiagnosticCategory::Error,
            message: "Index signature must have exactly one parameter, found {0}.",
        };
    pub const EXPECTED_A_SINGLE_PARAMETER_INDEX_SIGNATURE_TYPE_LITERAL_ON_AN_OBJECT_LITERAL:
        DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXPECTED_A_SINGLE_PARAMETER_INDEX_SIGNATURE_TYPE_LITERAL_ON_AN_OBJECT_LITERAL,
        category: DiagnosticCategory::Error,
        message: "Expected a single-parameter index signature type literal on an object literal assertion.",
    };
    pub const INDEX_SIGNATURE_IS_MISSING_A_TYPE_ANNOTATION: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::INDEX_SIGNATURE_IS_MISSING_A_TYPE_ANNOTATION,
        category: DiagnosticCategory::Error,
        message: "Index signature is missing a type annotation.",
    };
    pub const TYPE_HAS_NO_FAITHFUL_DART_EQUIVALENT_AND_WAS_TRANSLATED_TO_DYNAMIC:
        DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_HAS_NO_FAITHFUL_DART_EQUIVALENT_AND_WAS_TRANSLATED_TO_DYNAMIC,
        category: DiagnosticCategory::Warning,
        message: "Type '{0}' has no faithful Dart equivalent and was translated to 'dynamic'.",
    };
    pub const TYPE_NESTING_EXCEEDS_THE_MAXIMUM_DEPTH_OF_TRANSLATED_TO_DYNAMIC: DiagnosticMessage =
        DiagnosticMessage {
            code: diagnostic_codes::TYPE_NESTING_EXCEEDS_THE_MAXIMUM_DEPTH_OF_TRANSLATED_TO_DYNAMIC,
            category: DiagnosticCategory::Error,
            message: "Type nesting exceeds the maximum depth of {0}; translated to 'dynamic'.",
        };
}

pub mod diagnostic_codes {
    pub const INDEX_SIGNATURE_MUST_HAVE_EXACTLY_ONE_PARAMETER_FOUND: u32 = 90001;
    pub const EXPECTED_A_SINGLE_PARAMETER_INDEX_SIGNATURE_TYPE_LITERAL_ON_AN_OBJECT_LITERAL: u32 =
        90002;
    pub const INDEX_SIGNATURE_IS_MISSING_A_TYPE_ANNOTATION: u32 = 90003;
    pub const TYPE_HAS_NO_FAITHFUL_DART_EQUIVALENT_AND_WAS_TRANSLATED_TO_DYNAMIC: u32 = 90004;
    pub const TYPE_NESTING_EXCEEDS_THE_MAXIMUM_DEPTH_OF_TRANSLATED_TO_DYNAMIC: u32 = 90005;
}
