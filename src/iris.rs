//! Vocabulary IRIs used by config documents.

pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const NUMBER: &str = "http://www.w3.org/2001/XMLSchema#number";
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    pub const BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
}

pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const JSON: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#JSON";
}

pub mod rdfs {
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
}

/// Object-oriented component vocabulary.
pub mod oo {
    pub const REQUIRE_NAME: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#requireName";
    pub const REQUIRE_ELEMENT: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#requireElement";
    pub const REQUIRE_NO_CONSTRUCTOR: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#requireNoConstructor";
    pub const ARGUMENTS: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#arguments";
    pub const PARAMETER: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#parameter";
    pub const VALUE: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#value";
    pub const VARIABLE: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#Variable";

    pub const PARAMETER_RANGE_VALUE: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#parameterRangeValue";
    pub const PARAMETER_RANGE_ELEMENTS: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#parameterRangeElements";

    pub const RANGE_UNDEFINED: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#ParameterRangeUndefined";
    pub const RANGE_ARRAY: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#ParameterRangeArray";
    pub const RANGE_REST: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#ParameterRangeRest";
    pub const RANGE_TUPLE: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#ParameterRangeTuple";
    pub const RANGE_UNION: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#ParameterRangeUnion";
    pub const RANGE_INTERSECTION: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#ParameterRangeIntersection";
    pub const RANGE_LITERAL: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#ParameterRangeLiteral";
    pub const RANGE_COLLECT_ENTRIES: &str = "https://linkedsoftwaredependencies.org/vocabularies/object-oriented#ParameterRangeCollectEntries";
}
