//! Static symbol tables: the symbols introduced by each language standard,
//! plus the cross-cutting compiler directive and gate primitive maps.
//!
//! Compiler directives are kept with their backtick, both in the
//! per-standard tables and in [`COMPDIRECTS`], mirroring the shape of the
//! tables these were transcribed from.

use crate::lang::Standard;
use phf::phf_map;

/// Returns the symbols first introduced by the given standard.  Symbols
/// carried over from an earlier standard appear only in the earlier table.
pub(crate) fn introduced_symbols(standard: Standard) -> &'static [&'static str] {
    match standard {
        Standard::Verilog1995 => SYMBOLS_1364_1995,
        Standard::Verilog2001 => SYMBOLS_1364_2001,
        Standard::Verilog2005 => SYMBOLS_1364_2005,
        Standard::SystemVerilog2005 => SYMBOLS_1800_2005,
        Standard::SystemVerilog2009 => SYMBOLS_1800_2009,
        Standard::SystemVerilog2012 => SYMBOLS_1800_2012,
        // 1800-2017 was a clarification release; it reserved no new words.
        Standard::SystemVerilog2017 => &[],
        Standard::VerilogAms => SYMBOLS_VAMS,
    }
}

static SYMBOLS_1364_1995: &[&str] = &[
    "always", "and", "assign", "begin", "buf", "bufif0", "bufif1", "case",
    "casex", "casez", "cmos", "deassign", "default", "defparam", "disable",
    "edge", "else", "end", "endcase", "endfunction", "endmodule",
    "endprimitive", "endspecify", "endtable", "endtask", "event", "for",
    "force", "forever", "fork", "function", "highz0", "highz1", "if",
    "ifnone", "initial", "inout", "input", "integer", "join", "large",
    "macromodule", "medium", "module", "nand", "negedge", "nmos", "nor",
    "not", "notif0", "notif1", "or", "output", "parameter", "pmos",
    "posedge", "primitive", "pull0", "pull1", "pulldown", "pullup", "rcmos",
    "real", "realtime", "reg", "release", "repeat", "rnmos", "rpmos",
    "rtran", "rtranif0", "rtranif1", "scalared", "small", "specify",
    "specparam", "strong0", "strong1", "supply0", "supply1", "table",
    "task", "time", "tran", "tranif0", "tranif1", "tri", "tri0", "tri1",
    "triand", "trior", "trireg", "vectored", "wait", "wand", "weak0",
    "weak1", "while", "wire", "wor", "xnor", "xor",
    "`accelerate", "`autoexpand_vectornets", "`celldefine",
    "`default_nettype", "`define", "`else", "`endcelldefine", "`endif",
    "`endprotect", "`endprotected", "`expand_vectornets", "`ifdef",
    "`include", "`noaccelerate", "`noexpand_vectornets",
    "`noremove_gatenames", "`noremove_netnames", "`nounconnected_drive",
    "`protect", "`protected", "`remove_gatenames", "`remove_netnames",
    "`resetall", "`timescale", "`unconnected_drive", "`undef",
];

static SYMBOLS_1364_2001: &[&str] = &[
    "automatic", "cell", "config", "design", "endconfig", "endgenerate",
    "generate", "genvar", "incdir", "include", "instance", "liblist",
    "library", "localparam", "noshowcancelled", "pulsestyle_ondetect",
    "pulsestyle_onevent", "showcancelled", "signed", "unsigned", "use",
    "`default_decay_time", "`default_trireg_strength",
    "`delay_mode_distributed", "`delay_mode_path", "`delay_mode_unit",
    "`delay_mode_zero", "`elsif", "`ifndef", "`line", "`nosuppress_faults",
    "`suppress_faults",
];

static SYMBOLS_1364_2005: &[&str] = &[
    "uwire",
    "`begin_keywords", "`end_keywords", "`pragma",
];

static SYMBOLS_1800_2005: &[&str] = &[
    "alias", "always_comb", "always_ff", "always_latch", "assert",
    "assume", "before", "bind", "bins", "binsof", "bit", "break", "byte",
    "chandle", "class", "clocking", "const", "constraint", "context",
    "continue", "cover", "covergroup", "coverpoint", "cross", "dist", "do",
    "endclass", "endclocking", "endgroup", "endinterface", "endpackage",
    "endprogram", "endproperty", "endsequence", "enum", "expect", "export",
    "extends", "extern", "final", "first_match", "foreach", "forkjoin",
    "iff", "ignore_bins", "illegal_bins", "import", "inside", "int",
    "interface", "intersect", "join_any", "join_none", "local", "logic",
    "longint", "matches", "modport", "new", "null", "package", "packed",
    "priority", "program", "property", "protected", "pure", "rand",
    "randc", "randcase", "randsequence", "ref", "return", "sequence",
    "shortint", "shortreal", "solve", "static", "string", "struct",
    "super", "tagged", "this", "throughout", "timeprecision", "timeunit",
    "type", "typedef", "union", "unique", "var", "virtual", "void",
    "wait_order", "wildcard", "with", "within",
];

static SYMBOLS_1800_2009: &[&str] = &[
    "accept_on", "checker", "endchecker", "eventually", "global",
    "implies", "let", "nexttime", "reject_on", "restrict", "s_always",
    "s_eventually", "s_nexttime", "s_until", "s_until_with", "strong",
    "sync_accept_on", "sync_reject_on", "unique0", "until", "until_with",
    "untyped", "weak",
    "`__FILE__", "`__LINE__", "`undefineall",
];

static SYMBOLS_1800_2012: &[&str] = &[
    "implements", "interconnect", "nettype", "soft",
];

static SYMBOLS_VAMS: &[&str] = &[
    "above", "abs", "absdelay", "absdelta", "abstol", "ac_stim", "access",
    "acos", "acosh", "aliasparam", "analog", "analysis", "asin", "asinh",
    "assert", "atan", "atan2", "atanh", "branch", "ceil", "connect",
    "connectmodule", "connectrules", "continuous", "cos", "cosh", "cross",
    "ddt", "ddt_nature", "ddx", "discipline", "discrete", "domain",
    "driver_update", "endconnectmodule", "endconnectrules",
    "enddiscipline", "endnature", "endparamset", "exclude", "exp",
    "final_step", "flicker_noise", "floor", "flow", "from", "ground",
    "hypot", "idt", "idt_nature", "idtmod", "inf", "initial_step",
    "laplace_nd", "laplace_np", "laplace_zd", "laplace_zp",
    "last_crossing", "limexp", "ln", "log", "max", "merged", "min",
    "nature", "net_resolution", "noise_table", "paramset", "potential",
    "pow", "resolveto", "sin", "sinh", "slew", "split", "sqrt", "string",
    "tan", "tanh", "timer", "transition", "units", "white_noise", "wreal",
    "zi_nd", "zi_np", "zi_zd", "zi_zp",
    "`default_discipline", "`default_transition",
];

/// All compiler directives across all standards, keyed with the backtick,
/// mapped to the standard that introduced them.  Independent of the active
/// standard.
pub(crate) static COMPDIRECTS: phf::Map<&'static str, Standard> = phf_map! {
    "`accelerate" => Standard::Verilog1995,
    "`autoexpand_vectornets" => Standard::Verilog1995,
    "`celldefine" => Standard::Verilog1995,
    "`default_nettype" => Standard::Verilog1995,
    "`define" => Standard::Verilog1995,
    "`else" => Standard::Verilog1995,
    "`endcelldefine" => Standard::Verilog1995,
    "`endif" => Standard::Verilog1995,
    "`endprotect" => Standard::Verilog1995,
    "`endprotected" => Standard::Verilog1995,
    "`expand_vectornets" => Standard::Verilog1995,
    "`ifdef" => Standard::Verilog1995,
    "`include" => Standard::Verilog1995,
    "`noaccelerate" => Standard::Verilog1995,
    "`noexpand_vectornets" => Standard::Verilog1995,
    "`noremove_gatenames" => Standard::Verilog1995,
    "`noremove_netnames" => Standard::Verilog1995,
    "`nounconnected_drive" => Standard::Verilog1995,
    "`protect" => Standard::Verilog1995,
    "`protected" => Standard::Verilog1995,
    "`remove_gatenames" => Standard::Verilog1995,
    "`remove_netnames" => Standard::Verilog1995,
    "`resetall" => Standard::Verilog1995,
    "`timescale" => Standard::Verilog1995,
    "`unconnected_drive" => Standard::Verilog1995,
    "`undef" => Standard::Verilog1995,
    "`default_decay_time" => Standard::Verilog2001,
    "`default_trireg_strength" => Standard::Verilog2001,
    "`delay_mode_distributed" => Standard::Verilog2001,
    "`delay_mode_path" => Standard::Verilog2001,
    "`delay_mode_unit" => Standard::Verilog2001,
    "`delay_mode_zero" => Standard::Verilog2001,
    "`elsif" => Standard::Verilog2001,
    "`ifndef" => Standard::Verilog2001,
    "`line" => Standard::Verilog2001,
    "`nosuppress_faults" => Standard::Verilog2001,
    "`suppress_faults" => Standard::Verilog2001,
    "`begin_keywords" => Standard::Verilog2005,
    "`end_keywords" => Standard::Verilog2005,
    "`pragma" => Standard::Verilog2005,
    "`__FILE__" => Standard::SystemVerilog2009,
    "`__LINE__" => Standard::SystemVerilog2009,
    "`undefineall" => Standard::SystemVerilog2009,
    "`default_discipline" => Standard::VerilogAms,
    "`default_transition" => Standard::VerilogAms,
};

/// The built-in gate primitives.  All of them date back to 1364-1995.
pub(crate) static GATE_PRIMS: phf::Map<&'static str, Standard> = phf_map! {
    "and" => Standard::Verilog1995,
    "buf" => Standard::Verilog1995,
    "bufif0" => Standard::Verilog1995,
    "bufif1" => Standard::Verilog1995,
    "cmos" => Standard::Verilog1995,
    "nand" => Standard::Verilog1995,
    "nmos" => Standard::Verilog1995,
    "nor" => Standard::Verilog1995,
    "not" => Standard::Verilog1995,
    "notif0" => Standard::Verilog1995,
    "notif1" => Standard::Verilog1995,
    "or" => Standard::Verilog1995,
    "pmos" => Standard::Verilog1995,
    "pulldown" => Standard::Verilog1995,
    "pullup" => Standard::Verilog1995,
    "rcmos" => Standard::Verilog1995,
    "rnmos" => Standard::Verilog1995,
    "rpmos" => Standard::Verilog1995,
    "rtran" => Standard::Verilog1995,
    "rtranif0" => Standard::Verilog1995,
    "rtranif1" => Standard::Verilog1995,
    "tran" => Standard::Verilog1995,
    "tranif0" => Standard::Verilog1995,
    "tranif1" => Standard::Verilog1995,
    "xnor" => Standard::Verilog1995,
    "xor" => Standard::Verilog1995,
};
