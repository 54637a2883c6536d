use super::*;
use assert_matches::assert_matches;

#[test]
fn test_standard_parse() {
    assert_eq!("1364-1995".parse(), Ok(Standard::Verilog1995));
    assert_eq!("1995".parse(), Ok(Standard::Verilog1995));
    assert_eq!("1364-2001".parse(), Ok(Standard::Verilog2001));
    assert_eq!("2001".parse(), Ok(Standard::Verilog2001));
    assert_eq!("1364-2001-noconfig".parse(), Ok(Standard::Verilog2001));
    assert_eq!("1364-2005".parse(), Ok(Standard::Verilog2005));
    assert_eq!("1800-2005".parse(), Ok(Standard::SystemVerilog2005));
    assert_eq!("sv31".parse(), Ok(Standard::SystemVerilog2005));
    assert_eq!("1800-2009".parse(), Ok(Standard::SystemVerilog2009));
    assert_eq!("1800-2012".parse(), Ok(Standard::SystemVerilog2012));
    assert_eq!("1800-2017".parse(), Ok(Standard::SystemVerilog2017));
    assert_eq!("latest".parse(), Ok(Standard::SystemVerilog2017));
    assert_eq!("VAMS".parse(), Ok(Standard::VerilogAms));
    assert_eq!("AMS".parse(), Ok(Standard::VerilogAms));
    assert_eq!("vams-2.3".parse(), Ok(Standard::VerilogAms));
    assert_matches!(
        "1800-2021".parse::<Standard>(),
        Err(BadStandard(name)) if &*name == "1800-2021"
    );
    assert_matches!("".parse::<Standard>(), Err(BadStandard(_)));
    assert_eq!(Standard::VerilogAms.to_string(), "VAMS");
    assert_eq!(Standard::SystemVerilog2009.to_string(), "1800-2009");
}

#[test]
fn test_keyword_standards() {
    let v95 = Language::new(Standard::Verilog1995);
    let v01 = Language::new(Standard::Verilog2001);
    let sv05 = Language::new(Standard::SystemVerilog2005);
    let sv17 = Language::new(Standard::SystemVerilog2017);
    let vams = Language::new(Standard::VerilogAms);

    assert_eq!(v95.is_keyword("wire"), Some(Standard::Verilog1995));
    // The introducing standard is reported even under later standards.
    assert_eq!(sv17.is_keyword("wire"), Some(Standard::Verilog1995));
    assert_eq!(v95.is_keyword("logic"), None);
    assert_eq!(sv05.is_keyword("logic"), Some(Standard::SystemVerilog2005));
    assert_eq!(sv17.is_keyword("logic"), Some(Standard::SystemVerilog2005));
    assert_eq!(v01.is_keyword("uwire"), None);
    assert_eq!(sv05.is_keyword("uwire"), Some(Standard::Verilog2005));
    assert_eq!(vams.is_keyword("uwire"), Some(Standard::Verilog2005));
    assert_eq!(vams.is_keyword("analog"), Some(Standard::VerilogAms));
    assert_eq!(sv17.is_keyword("analog"), None);
    assert_eq!(sv17.is_keyword("nettype"), Some(Standard::SystemVerilog2012));
    assert_eq!(sv17.is_keyword("let"), Some(Standard::SystemVerilog2009));
    assert_eq!(sv05.is_keyword("let"), None);
    // "string" exists on both branches of the partial order, with its own
    // introducing standard on each.
    assert_eq!(vams.is_keyword("string"), Some(Standard::VerilogAms));
    assert_eq!(sv17.is_keyword("string"), Some(Standard::SystemVerilog2005));
    // Directives are keywords too.
    assert_eq!(v95.is_keyword("`define"), Some(Standard::Verilog1995));
    assert_eq!(v95.is_keyword("mdoule"), None);
    assert_eq!(sv17.is_keyword("mdoule"), None);
}

#[test]
fn test_compdirect() {
    let v95 = Language::new(Standard::Verilog1995);
    assert_eq!(v95.is_compdirect("`define"), Some(Standard::Verilog1995));
    assert_eq!(v95.is_compdirect("`pragma"), Some(Standard::Verilog2005));
    // Directive classification ignores the view's standard.
    assert_eq!(
        v95.is_compdirect("`undefineall"),
        Some(Standard::SystemVerilog2009)
    );
    assert_eq!(
        v95.is_compdirect("`default_discipline"),
        Some(Standard::VerilogAms)
    );
    assert_eq!(v95.is_compdirect("`notundef"), None);
    assert_eq!(v95.is_compdirect("define"), None);
}

#[test]
fn test_gateprim() {
    let sv17 = Language::new(Standard::SystemVerilog2017);
    assert_eq!(sv17.is_gateprim("nand"), Some(Standard::Verilog1995));
    assert_eq!(sv17.is_gateprim("pulldown"), Some(Standard::Verilog1995));
    assert_eq!(sv17.is_gateprim("wire"), None);
    assert_eq!(sv17.is_gateprim("foo"), None);
}

#[test]
fn test_keywords_map() {
    let lang = Language::new(Standard::Verilog2001);
    let map = lang.keywords();
    assert_eq!(map.get("module"), Some(&Standard::Verilog1995));
    assert_eq!(map.get("generate"), Some(&Standard::Verilog2001));
    assert!(!map.contains_key("uwire"));
    for (&sym, &standard) in map {
        assert!(Standard::Verilog2001.basis().contains(&standard));
        assert_eq!(lang.is_keyword(sym), Some(standard));
    }
}

// The only test that touches the process-global state; everything else
// uses explicit Language values so tests can run concurrently.
#[test]
fn test_global_language() {
    assert_eq!(language_maximum(), Standard::SystemVerilog2017);
    assert_eq!(
        set_language_standard("1364-1995"),
        Ok(Standard::Verilog1995)
    );
    assert_eq!(language_standard(), Standard::Verilog1995);
    assert_eq!(is_keyword("wire"), Some(Standard::Verilog1995));
    assert_eq!(is_keyword("logic"), None);
    // A bad name leaves the active standard alone.
    assert_matches!(set_language_standard("9999"), Err(BadStandard(_)));
    assert_eq!(language_standard(), Standard::Verilog1995);
    assert_eq!(
        set_language_standard("latest"),
        Ok(Standard::SystemVerilog2017)
    );
    assert_eq!(is_keyword("wire"), Some(Standard::Verilog1995));
    assert_eq!(is_keyword("logic"), Some(Standard::SystemVerilog2005));
    assert_eq!(
        language_keywords(None).standard(),
        Standard::SystemVerilog2017
    );
    assert_eq!(
        language_keywords(Some(Standard::Verilog1995)).standard(),
        Standard::Verilog1995
    );
    assert_eq!(is_compdirect("`define"), Some(Standard::Verilog1995));
    assert_eq!(is_compdirect("`notundef"), None);
    assert_eq!(is_gateprim("nand"), Some(Standard::Verilog1995));
}
