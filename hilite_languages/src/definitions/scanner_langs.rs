//! Languages tokenized by custom scanner pipelines

use hilite_engine::scanners::{C_STYLE_PIPELINE, GML_PIPELINE, INI_PIPELINE, LUA_PIPELINE,
    PLAIN_TEXT_PIPELINE};
use hilite_engine::LanguageDefinition;

pub fn build_cpp() -> LanguageDefinition {
    let mut def = LanguageDefinition::with_scanners("C++", C_STYLE_PIPELINE);
    def.set_keywords(&[
        "alignas", "alignof", "and", "and_eq", "asm", "atomic_cancel", "atomic_commit",
        "atomic_noexcept", "auto", "bitand", "bitor", "bool", "break", "case", "catch", "char",
        "char16_t", "char32_t", "class", "compl", "concept", "const", "constexpr", "const_cast",
        "continue", "decltype", "default", "delete", "do", "double", "dynamic_cast", "else",
        "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if",
        "import", "inline", "int", "long", "module", "mutable", "namespace", "new", "noexcept",
        "not", "not_eq", "nullptr", "operator", "or", "or_eq", "private", "protected", "public",
        "register", "reinterpret_cast", "requires", "return", "short", "signed", "sizeof",
        "static", "static_assert", "static_cast", "struct", "switch", "synchronized", "template",
        "this", "thread_local", "throw", "true", "try", "typedef", "typeid", "typename", "union",
        "unsigned", "using", "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
    ]);
    def
}

pub fn build_c() -> LanguageDefinition {
    let mut def = LanguageDefinition::with_scanners("C", C_STYLE_PIPELINE);
    def.set_keywords(&[
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
        "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
        "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
        "typedef", "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof",
        "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
        "_Thread_local",
    ]);
    def
}

pub fn build_rust() -> LanguageDefinition {
    let mut def = LanguageDefinition::with_scanners("Rust", C_STYLE_PIPELINE);
    def.set_keywords(&[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
        "pub", "ref", "return", "self", "static", "struct", "trait", "type", "unsafe", "use",
        "where", "while", "yield",
    ]);
    def
}

pub fn build_javascript() -> LanguageDefinition {
    let mut def = LanguageDefinition::with_scanners("JavaScript", C_STYLE_PIPELINE);
    def.set_keywords(&[
        "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
        "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for",
        "function", "if", "import", "in", "instanceof", "new", "null", "return", "super",
        "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with",
        "yield",
    ]);
    def.set_identifiers(
        &[
            "Array", "Boolean", "Date", "Error", "Function", "JSON", "Math", "Number", "Object",
            "Promise", "RegExp", "String", "Symbol", "TypeError", "ValueError",
        ],
        "",
    );
    def
}

pub fn build_gml() -> LanguageDefinition {
    let mut def = LanguageDefinition::with_scanners("GML", GML_PIPELINE);
    def.set_keywords(&[
        "begin", "end", "if", "else", "while", "for", "do", "switch", "case", "break",
        "continue", "return", "function", "var", "globalvar", "with", "repeat", "until", "enum",
        "and", "or", "not", "xor", "true", "false",
    ]);
    def.set_identifiers(
        &[
            "abs", "arccos", "arcsin", "arctan", "ceil", "cos", "exp", "floor", "log", "round",
            "sin", "sqrt", "tan", "draw_text", "draw_sprite", "instance_create",
            "instance_destroy", "keyboard_check", "mouse_check_button",
        ],
        "Built-in function",
    );
    def
}

pub fn build_lua() -> LanguageDefinition {
    let mut def = LanguageDefinition::with_scanners("Lua", LUA_PIPELINE);
    def.set_keywords(&[
        "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if",
        "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
    ]);
    def.set_identifiers(
        &[
            "assert", "collectgarbage", "dofile", "error", "getmetatable", "ipairs", "loadfile",
            "load", "loadstring", "next", "pairs", "pcall", "print", "rawequal", "rawlen",
            "rawget", "rawset", "select", "setmetatable", "tonumber", "tostring", "type",
            "xpcall", "_G", "_VERSION", "arshift", "band", "bnot", "bor", "bxor", "btest",
            "extract", "lrotate", "lshift", "replace", "rrotate", "rshift", "create", "resume",
            "running", "status", "wrap", "yield", "isyieldable", "debug", "getuservalue",
            "gethook", "getinfo", "getlocal", "getregistry", "getupvalue", "upvaluejoin",
            "upvalueid", "setuservalue", "sethook", "setlocal", "setupvalue", "traceback",
            "close", "flush", "input", "lines", "open", "output", "popen", "read", "tmpfile",
            "write", "seek", "setvbuf", "__gc", "__tostring", "abs", "acos", "asin", "atan",
            "ceil", "cos", "deg", "exp", "tointeger", "floor", "fmod", "ult", "log", "max",
            "min", "modf", "rad", "random", "randomseed", "sin", "sqrt", "string", "tan",
            "atan2", "cosh", "sinh", "tanh", "pow", "frexp", "ldexp", "log10", "pi", "huge",
            "maxinteger", "mininteger", "loadlib", "searchpath", "seeall", "preload", "cpath",
            "path", "searchers", "loaded", "module", "require", "clock", "date", "difftime",
            "execute", "exit", "getenv", "remove", "rename", "setlocale", "time", "tmpname",
            "byte", "char", "dump", "find", "format", "gmatch", "gsub", "len", "lower", "match",
            "rep", "reverse", "sub", "upper", "pack", "packsize", "unpack", "concat", "maxn",
            "insert", "move", "sort", "offset", "codepoint", "codes", "charpattern",
            "coroutine", "table", "io", "os", "utf8", "bit32", "math", "package",
        ],
        "",
    );
    def.comment_start = Some("--[[");
    def.comment_end = Some("]]");
    def.single_line_comment = Some("--");
    def
}

pub fn build_ini() -> LanguageDefinition {
    let mut def = LanguageDefinition::with_scanners("Ini", INI_PIPELINE);
    def.comment_start = Some("\n");
    def.comment_end = Some("\n");
    def.single_line_comment = Some(";");
    def.case_sensitive = false;
    def.preproc_char = None;
    def
}

pub fn build_plain_text() -> LanguageDefinition {
    let mut def = LanguageDefinition::with_scanners("Text", PLAIN_TEXT_PIPELINE);
    def.comment_start = Some("\n");
    def.comment_end = Some("\n");
    def.single_line_comment = Some("\n");
    def.case_sensitive = false;
    def.preproc_char = None;
    def
}
