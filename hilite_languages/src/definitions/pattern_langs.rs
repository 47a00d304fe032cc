//! Languages tokenized by ordered declarative pattern lists

use super::{
    number_rows, CHAR_LITERAL_ROW, IDENTIFIER_ROW, PREPROCESSOR_ROW, PUNCTUATION_ROW,
    PUNCTUATION_WITH_COLON_ROW, WIDE_STRING_ROW,
};
use hilite_engine::language::compile_patterns;
use hilite_engine::{LanguageDefinition, PaletteIndex};

fn c_like_rows() -> Vec<(&'static str, PaletteIndex)> {
    let mut rows = vec![
        (PREPROCESSOR_ROW, PaletteIndex::Preprocessor),
        (WIDE_STRING_ROW, PaletteIndex::String),
        (CHAR_LITERAL_ROW, PaletteIndex::CharLiteral),
    ];
    rows.extend(number_rows());
    rows.push((IDENTIFIER_ROW, PaletteIndex::Identifier));
    rows.push((PUNCTUATION_ROW, PaletteIndex::Punctuation));
    rows
}

pub fn build_hlsl() -> LanguageDefinition {
    let mut def = LanguageDefinition::with_patterns("HLSL", compile_patterns(&c_like_rows()));
    def.set_keywords(&[
        "AppendStructuredBuffer", "asm", "asm_fragment", "BlendState", "bool", "break", "Buffer",
        "ByteAddressBuffer", "case", "cbuffer", "centroid", "class", "column_major", "compile",
        "compile_fragment", "CompileShader", "const", "continue", "ComputeShader",
        "ConsumeStructuredBuffer", "default", "DepthStencilState", "DepthStencilView", "discard",
        "do", "double", "DomainShader", "dword", "else", "export", "extern", "false", "float",
        "for", "fxgroup", "GeometryShader", "groupshared", "half", "Hullshader", "if", "in",
        "inline", "inout", "InputPatch", "int", "interface", "line", "lineadj", "linear",
        "LineStream", "matrix", "min16float", "min10float", "min16int", "min12int", "min16uint",
        "namespace", "nointerpolation", "noperspective", "NULL", "out", "OutputPatch",
        "packoffset", "pass", "pixelfragment", "PixelShader", "point", "PointStream", "precise",
        "RasterizerState", "RenderTargetView", "return", "register", "row_major", "RWBuffer",
        "RWByteAddressBuffer", "RWStructuredBuffer", "RWTexture1D", "RWTexture1DArray",
        "RWTexture2D", "RWTexture2DArray", "RWTexture3D", "sample", "sampler", "SamplerState",
        "SamplerComparisonState", "shared", "snorm", "stateblock", "stateblock_state", "static",
        "string", "struct", "switch", "StructuredBuffer", "tbuffer", "technique", "technique10",
        "technique11", "texture", "Texture1D", "Texture1DArray", "Texture2D", "Texture2DArray",
        "Texture2DMS", "Texture2DMSArray", "Texture3D", "TextureCube", "TextureCubeArray",
        "true", "typedef", "triangle", "triangleadj", "TriangleStream", "uint", "uniform",
        "unorm", "unsigned", "vector", "vertexfragment", "VertexShader", "void", "volatile",
        "while", "bool1", "bool2", "bool3", "bool4", "double1", "double2", "double3", "double4",
        "float1", "float2", "float3", "float4", "int1", "int2", "int3", "int4", "uint1",
        "uint2", "uint3", "uint4", "dword1", "dword2", "dword3", "dword4", "half1", "half2",
        "half3", "half4", "float1x1", "float2x1", "float3x1", "float4x1", "float1x2",
        "float2x2", "float3x2", "float4x2", "float1x3", "float2x3", "float3x3", "float4x3",
        "float1x4", "float2x4", "float3x4", "float4x4", "half1x1", "half2x1", "half3x1",
        "half4x1", "half1x2", "half2x2", "half3x2", "half4x2", "half1x3", "half2x3", "half3x3",
        "half4x3", "half1x4", "half2x4", "half3x4", "half4x4",
    ]);
    def.set_identifiers(
        &[
            "abort", "abs", "acos", "all", "AllMemoryBarrier", "AllMemoryBarrierWithGroupSync",
            "any", "asdouble", "asfloat", "asin", "asint", "asuint", "atan", "atan2", "ceil",
            "CheckAccessFullyMapped", "clamp", "clip", "cos", "cosh", "countbits", "cross",
            "D3DCOLORtoUBYTE4", "ddx", "ddx_coarse", "ddx_fine", "ddy", "ddy_coarse",
            "ddy_fine", "degrees", "determinant", "DeviceMemoryBarrier",
            "DeviceMemoryBarrierWithGroupSync", "distance", "dot", "dst", "errorf",
            "EvaluateAttributeAtCentroid", "EvaluateAttributeAtSample",
            "EvaluateAttributeSnapped", "exp", "exp2", "f16tof32", "f32tof16", "faceforward",
            "firstbithigh", "firstbitlow", "floor", "fma", "fmod", "frac", "frexp", "fwidth",
            "GetRenderTargetSampleCount", "GetRenderTargetSamplePosition", "GroupMemoryBarrier",
            "GroupMemoryBarrierWithGroupSync", "InterlockedAdd", "InterlockedAnd",
            "InterlockedCompareExchange", "InterlockedCompareStore", "InterlockedExchange",
            "InterlockedMax", "InterlockedMin", "InterlockedOr", "InterlockedXor", "isfinite",
            "isinf", "isnan", "ldexp", "length", "lerp", "lit", "log", "log10", "log2", "mad",
            "max", "min", "modf", "msad4", "mul", "noise", "normalize", "pow", "printf",
            "Process2DQuadTessFactorsAvg", "Process2DQuadTessFactorsMax",
            "Process2DQuadTessFactorsMin", "ProcessIsolineTessFactors",
            "ProcessQuadTessFactorsAvg", "ProcessQuadTessFactorsMax",
            "ProcessQuadTessFactorsMin", "ProcessTriTessFactorsAvg", "ProcessTriTessFactorsMax",
            "ProcessTriTessFactorsMin", "radians", "rcp", "reflect", "refract", "reversebits",
            "round", "rsqrt", "saturate", "sign", "sin", "sincos", "sinh", "smoothstep",
            "sqrt", "step", "tan", "tanh", "tex1D", "tex1Dbias", "tex1Dgrad", "tex1Dlod",
            "tex1Dproj", "tex2D", "tex2Dbias", "tex2Dgrad", "tex2Dlod", "tex2Dproj", "tex3D",
            "tex3Dbias", "tex3Dgrad", "tex3Dlod", "tex3Dproj", "texCUBE", "texCUBEbias",
            "texCUBEgrad", "texCUBElod", "texCUBEproj", "transpose", "trunc",
        ],
        "Built-in function",
    );
    def
}

pub fn build_glsl() -> LanguageDefinition {
    let mut def = LanguageDefinition::with_patterns("GLSL", compile_patterns(&c_like_rows()));
    def.set_keywords(&[
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
        "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
        "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
        "typedef", "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof",
        "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
        "_Thread_local",
    ]);
    def.set_identifiers(
        &[
            "abort", "abs", "acos", "asin", "atan", "atexit", "atof", "atoi", "atol", "ceil",
            "clock", "cosh", "ctime", "div", "exit", "fabs", "floor", "fmod", "getchar",
            "getenv", "isalnum", "isalpha", "isdigit", "isgraph", "ispunct", "isspace",
            "isupper", "kbhit", "log10", "log2", "log", "memcmp", "modf", "pow", "putchar",
            "putenv", "puts", "rand", "remove", "rename", "sinh", "sqrt", "srand", "strcat",
            "strcmp", "strerror", "time", "tolower", "toupper",
        ],
        "Built-in function",
    );
    def
}

pub fn build_python() -> LanguageDefinition {
    let mut rows = vec![
        (r#"(b|u|f|r)?"(\\.|[^"])*""#, PaletteIndex::String),
        (r"(b|u|f|r)?'(\\.|[^'])*'", PaletteIndex::String),
    ];
    rows.extend(number_rows());
    rows.push((IDENTIFIER_ROW, PaletteIndex::Identifier));
    rows.push((PUNCTUATION_WITH_COLON_ROW, PaletteIndex::Punctuation));

    let mut def = LanguageDefinition::with_patterns("Python", compile_patterns(&rows));
    def.set_keywords(&[
        "False", "await", "else", "import", "pass", "None", "break", "except", "in", "raise",
        "True", "class", "finally", "is", "return", "and", "continue", "for", "lambda", "try",
        "as", "def", "from", "nonlocal", "while", "assert", "del", "global", "not", "with",
        "async", "elif", "if", "or", "yield",
    ]);
    def.set_identifiers(
        &[
            "abs", "aiter", "all", "any", "anext", "ascii", "bin", "bool", "breakpoint",
            "bytearray", "bytes", "callable", "chr", "classmethod", "compile", "complex",
            "delattr", "dict", "dir", "divmod", "enumerate", "eval", "exec", "filter", "float",
            "format", "frozenset", "getattr", "globals", "hasattr", "hash", "help", "hex",
            "id", "input", "int", "isinstance", "issubclass", "iter", "len", "list", "locals",
            "map", "max", "memoryview", "min", "next", "object", "oct", "open", "ord", "pow",
            "print", "property", "range", "repr", "reversed", "round", "set", "setattr",
            "slice", "sorted", "staticmethod", "str", "sum", "super", "tuple", "type", "vars",
            "zip", "__import__",
        ],
        "Built-in function",
    );
    def.comment_start = Some("\"\"\"");
    def.comment_end = Some("\"\"\"");
    def.single_line_comment = Some("#");
    def
}

pub fn build_sql() -> LanguageDefinition {
    let mut rows = vec![
        (WIDE_STRING_ROW, PaletteIndex::String),
        (r"'[^']*'", PaletteIndex::String),
    ];
    rows.extend(number_rows());
    rows.push((IDENTIFIER_ROW, PaletteIndex::Identifier));
    rows.push((PUNCTUATION_ROW, PaletteIndex::Punctuation));

    let mut def = LanguageDefinition::with_patterns("SQL", compile_patterns(&rows));
    def.case_sensitive = false;
    def.set_keywords(&[
        "ADD", "EXCEPT", "PERCENT", "ALL", "EXEC", "PLAN", "ALTER", "EXECUTE", "PRECISION",
        "AND", "EXISTS", "PRIMARY", "ANY", "EXIT", "PRINT", "AS", "FETCH", "PROC", "ASC",
        "FILE", "PROCEDURE", "AUTHORIZATION", "FILLFACTOR", "PUBLIC", "BACKUP", "FOR",
        "RAISERROR", "BEGIN", "FOREIGN", "READ", "BETWEEN", "FREETEXT", "READTEXT", "BREAK",
        "FREETEXTTABLE", "RECONFIGURE", "BROWSE", "FROM", "REFERENCES", "BULK", "FULL",
        "REPLICATION", "BY", "FUNCTION", "RESTORE", "CASCADE", "GOTO", "RESTRICT", "CASE",
        "GRANT", "RETURN", "CHECK", "GROUP", "REVOKE", "CHECKPOINT", "HAVING", "RIGHT",
        "CLOSE", "HOLDLOCK", "ROLLBACK", "CLUSTERED", "IDENTITY", "ROWCOUNT", "COALESCE",
        "IDENTITY_INSERT", "ROWGUIDCOL", "COLLATE", "IDENTITYCOL", "RULE", "COLUMN", "IF",
        "SAVE", "COMMIT", "IN", "SCHEMA", "COMPUTE", "INDEX", "SELECT", "CONSTRAINT", "INNER",
        "SESSION_USER", "CONTAINS", "INSERT", "SET", "CONTAINSTABLE", "INTERSECT", "SETUSER",
        "CONTINUE", "INTO", "SHUTDOWN", "CONVERT", "IS", "SOME", "CREATE", "JOIN",
        "STATISTICS", "CROSS", "KEY", "SYSTEM_USER", "CURRENT", "KILL", "TABLE",
        "CURRENT_DATE", "LEFT", "TEXTSIZE", "CURRENT_TIME", "LIKE", "THEN",
        "CURRENT_TIMESTAMP", "LINENO", "TO", "CURRENT_USER", "LOAD", "TOP", "CURSOR",
        "NATIONAL", "TRAN", "DATABASE", "NOCHECK", "TRANSACTION", "DBCC", "NONCLUSTERED",
        "TRIGGER", "DEALLOCATE", "NOT", "TRUNCATE", "DECLARE", "NULL", "TSEQUAL", "DEFAULT",
        "NULLIF", "UNION", "DELETE", "OF", "UNIQUE", "DENY", "OFF", "UPDATE", "DESC",
        "OFFSETS", "UPDATETEXT", "DISK", "ON", "USE", "DISTINCT", "OPEN", "USER",
        "DISTRIBUTED", "OPENDATASOURCE", "VALUES", "DOUBLE", "OPENQUERY", "VARYING", "DROP",
        "OPENROWSET", "VIEW", "DUMMY", "OPENXML", "WAITFOR", "DUMP", "OPTION", "WHEN", "ELSE",
        "OR", "WHERE", "END", "ORDER", "WHILE", "ERRLVL", "OUTER", "WITH", "ESCAPE", "OVER",
        "WRITETEXT",
    ]);
    def.set_identifiers(
        &[
            "ABS", "ACOS", "ADD_MONTHS", "ASCII", "ASCIISTR", "ASIN", "ATAN", "ATAN2", "AVG",
            "BFILENAME", "BIN_TO_NUM", "BITAND", "CARDINALITY", "CASE", "CAST", "CEIL",
            "CHARTOROWID", "CHR", "COALESCE", "COMPOSE", "CONCAT", "CONVERT", "CORR", "COS",
            "COSH", "COUNT", "COVAR_POP", "COVAR_SAMP", "CUME_DIST", "CURRENT_DATE",
            "CURRENT_TIMESTAMP", "DBTIMEZONE", "DECODE", "DECOMPOSE", "DENSE_RANK", "DUMP",
            "EMPTY_BLOB", "EMPTY_CLOB", "EXP", "EXTRACT", "FIRST_VALUE", "FLOOR", "FROM_TZ",
            "GREATEST", "GROUP_ID", "HEXTORAW", "INITCAP", "INSTR", "INSTR2", "INSTR4",
            "INSTRB", "INSTRC", "LAG", "LAST_DAY", "LAST_VALUE", "LEAD", "LEAST", "LENGTH",
            "LENGTH2", "LENGTH4", "LENGTHB", "LENGTHC", "LISTAGG", "LN", "LNNVL",
            "LOCALTIMESTAMP", "LOG", "LOWER", "LPAD", "LTRIM", "MAX", "MEDIAN", "MIN", "MOD",
            "MONTHS_BETWEEN", "NANVL", "NCHR", "NEW_TIME", "NEXT_DAY", "NTH_VALUE", "NULLIF",
            "NUMTODSINTERVAL", "NUMTOYMINTERVAL", "NVL", "NVL2", "POWER", "RANK", "RAWTOHEX",
            "REGEXP_COUNT", "REGEXP_INSTR", "REGEXP_REPLACE", "REGEXP_SUBSTR", "REMAINDER",
            "REPLACE", "ROUND", "ROWNUM", "RPAD", "RTRIM", "SESSIONTIMEZONE", "SIGN", "SIN",
            "SINH", "SOUNDEX", "SQRT", "STDDEV", "SUBSTR", "SUM", "SYS_CONTEXT", "SYSDATE",
            "SYSTIMESTAMP", "TAN", "TANH", "TO_CHAR", "TO_CLOB", "TO_DATE", "TO_DSINTERVAL",
            "TO_LOB", "TO_MULTI_BYTE", "TO_NCLOB", "TO_NUMBER", "TO_SINGLE_BYTE",
            "TO_TIMESTAMP", "TO_TIMESTAMP_TZ", "TO_YMINTERVAL", "TRANSLATE", "TRIM", "TRUNC",
            "TZ_OFFSET", "UID", "UPPER", "USER", "USERENV", "VAR_POP", "VAR_SAMP", "VARIANCE",
            "VSIZE",
        ],
        "",
    );
    def.single_line_comment = Some("--");
    def
}

pub fn build_angel_script() -> LanguageDefinition {
    let mut rows = vec![
        (WIDE_STRING_ROW, PaletteIndex::String),
        (CHAR_LITERAL_ROW, PaletteIndex::String),
    ];
    rows.extend(number_rows());
    rows.push((IDENTIFIER_ROW, PaletteIndex::Identifier));
    rows.push((PUNCTUATION_ROW, PaletteIndex::Punctuation));

    let mut def = LanguageDefinition::with_patterns("AngelScript", compile_patterns(&rows));
    def.set_keywords(&[
        "and", "abstract", "auto", "bool", "break", "case", "cast", "class", "const",
        "continue", "default", "do", "double", "else", "enum", "false", "final", "float",
        "for", "from", "funcdef", "function", "get", "if", "import", "in", "inout", "int",
        "interface", "int8", "int16", "int32", "int64", "is", "mixin", "namespace", "not",
        "null", "or", "out", "override", "private", "protected", "return", "set", "shared",
        "super", "switch", "this ", "true", "typedef", "uint", "uint8", "uint16", "uint32",
        "uint64", "void", "while", "xor",
    ]);
    def.set_identifiers(
        &[
            "cos", "sin", "tab", "acos", "asin", "atan", "atan2", "cosh", "sinh", "tanh",
            "log", "log10", "pow", "sqrt", "abs", "ceil", "floor", "fraction", "closeTo",
            "fpFromIEEE", "fpToIEEE", "complex", "opEquals", "opAddAssign", "opSubAssign",
            "opMulAssign", "opDivAssign", "opAdd", "opSub", "opMul", "opDiv",
        ],
        "",
    );
    def
}

pub fn build_cs() -> LanguageDefinition {
    let mut rows = vec![(r#"($|@)?"(\\.|[^"])*""#, PaletteIndex::String)];
    rows.extend(number_rows());
    rows.push((IDENTIFIER_ROW, PaletteIndex::Identifier));
    rows.push((PUNCTUATION_ROW, PaletteIndex::Punctuation));

    let mut def = LanguageDefinition::with_patterns("C#", compile_patterns(&rows));
    def.set_keywords(&[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double",
        "else", "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float",
        "for", "foreach", "goto", "if", "implicit", "in", "in (generic modifier)", "int",
        "interface", "internal", "is", "lock", "long", "namespace", "new", "null", "object",
        "operator", "out", "out (generic modifier)", "override", "params", "private",
        "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
        "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw",
        "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using",
        "using static", "void", "volatile", "while",
    ]);
    def
}

pub fn build_json() -> LanguageDefinition {
    let rows = vec![
        (r#""(\\.|[^"])*""#, PaletteIndex::String),
        (
            r"[+-]?([0-9]+([.][0-9]*)?|[.][0-9]+)([eE][+-]?[0-9]+)?",
            PaletteIndex::Number,
        ),
        (PUNCTUATION_WITH_COLON_ROW, PaletteIndex::Punctuation),
        (r"false|true", PaletteIndex::Keyword),
    ];
    LanguageDefinition::with_patterns("Json", compile_patterns(&rows))
}
