use std::any::TypeId;

use crate::display::short_type_name;
use crate::*;

fn init_logger() {
    let _ = dotenv::dotenv();
    let _ = pretty_env_logger::try_init_timed();
}

type Four = TypeList![i32, f64, char, f32];
type Mixed = TypeList![i32, char, f64, i16];

const _: () = assert!(length::<Four>() == 4);
const _: () = assert!(length::<TypeList![]>() == 0);
const _: () = assert!(is_empty::<Nil>());
const _: () = assert!(!is_empty::<Four>());
const _: () = assert!(length::<Prepend<u8, Four>>() == length::<Four>() + 1);

const _: () = assert_type_eq::<At<Mixed, I2>, f64>();
const _: () = assert_type_eq::<At<Mixed, I0>, i32>();
const _: () = assert_type_eq::<At<Mixed, I3>, i16>();

#[test]
fn length_counts_every_element() {
    assert_eq!(<Nil as TypeList>::LEN, 0);
    assert_eq!(<TypeList![()] as TypeList>::LEN, 1);
    assert_eq!(<Four as TypeList>::LEN, 4);
    assert_eq!(<TypeList![u8, u8, u8,] as TypeList>::LEN, 3);
}

#[test]
fn index_zero_is_the_head() {
    assert_ne!(TypeId::of::<At<Mixed, I0>>(), TypeId::of::<char>());
    assert_eq!(TypeId::of::<At<Mixed, I0>>(), TypeId::of::<<Mixed as NonEmpty>::Head>());
}

type Unsized = TypeList![u8, str, [u8], dyn std::fmt::Debug];

const _: () = assert!(length::<Unsized>() == 4);
const _: () = assert_type_eq::<At<Unsized, I1>, str>();

#[test]
fn unsized_elements() {
    init_logger();

    assert_eq!(<Unsized as TypeList>::LEN, 4);
    assert_type_eq::<At<Unsized, I2>, [u8]>();
    assert_type_eq::<At<Unsized, I3>, dyn std::fmt::Debug>();
    assert_type_eq::<<Unsized as NonEmpty>::Last, dyn std::fmt::Debug>();
    assert_type_eq::<<Unsized as Reverse>::Output, TypeList![dyn std::fmt::Debug, [u8], str, u8]>();
    assert_type_eq::<<Nil as PushBack<str>>::Output, TypeList![str]>();

    assert!(Unsized::type_info_at(1).expect("#1 is within the list").is::<str>());
    assert_eq!(Unsized::position_of::<[u8]>(), Some(2));
    assert_eq!(display::<TypeList![str, [u8]]>().to_string(), "[str, [u8]]");
}

#[test]
fn idx_values() {
    assert_eq!(I0::IDX, 0);
    assert_eq!(I1::IDX, 1);
    assert_eq!(I7::IDX, 7);
    assert_eq!(I15::IDX, 15);
}

#[test]
fn non_empty_parts() {
    assert_type_eq::<<Four as NonEmpty>::Head, i32>();
    assert_type_eq::<<Four as NonEmpty>::Tail, TypeList![f64, char, f32]>();
    assert_type_eq::<<Four as NonEmpty>::Last, f32>();
    assert_type_eq::<<TypeList![u8] as NonEmpty>::Last, u8>();
}

#[test]
fn push_back_concat_reverse() {
    assert_type_eq::<<Nil as PushBack<u8>>::Output, TypeList![u8]>();
    assert_type_eq::<<TypeList![u8, u16] as PushBack<u32>>::Output, TypeList![u8, u16, u32]>();

    type Joined = <TypeList![u8, u16] as Concat<TypeList![u32, u64]>>::Output;
    assert_type_eq::<Joined, TypeList![u8, u16, u32, u64]>();
    assert_eq!(<Joined as TypeList>::LEN, 4);
    assert_type_eq::<<Nil as Concat<Nil>>::Output, Nil>();

    assert_type_eq::<<Four as Reverse>::Output, TypeList![f32, char, f64, i32]>();
    assert_type_eq::<<Nil as Reverse>::Output, Nil>();
}

#[test]
fn tuples_as_lists() {
    assert_type_eq::<ListOf<()>, Nil>();
    assert_type_eq::<ListOf<(i32, f64, char, f32)>, Four>();
    assert_eq!(<ListOf<(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8)> as TypeList>::LEN, 12);
}

#[test]
fn reflect_lookup() {
    init_logger();

    let info = Mixed::type_info_at(2).expect("#2 is within the list");
    assert_eq!(info.index, 2);
    assert!(info.is::<f64>());
    assert_eq!(info.name, "f64");

    assert_eq!(Mixed::type_info_at(4), Err(LookupError::OutOfRange { index: 4, len: 4 }));
    assert_eq!(Mixed::type_info_at(usize::MAX), Err(LookupError::OutOfRange { index: usize::MAX, len: 4 }));
    assert_eq!(Nil::type_info_at(0), Err(LookupError::Empty { index: 0 }));
}

#[test]
fn reflect_infos_keep_order() {
    init_logger();

    let infos = Four::type_infos();
    let indices = infos.iter().map(|info| info.index).collect::<Vec<_>>();
    let names = infos.iter().map(|info| info.name).collect::<Vec<_>>();

    assert_eq!(indices, [0, 1, 2, 3]);
    assert_eq!(names, ["i32", "f64", "char", "f32"]);
    assert!(Nil::type_infos().is_empty());
}

#[test]
fn reflect_position_of() {
    type Repeated = TypeList![u8, String, u8];

    assert_eq!(Repeated::position_of::<u8>(), Some(0));
    assert_eq!(Repeated::position_of::<String>(), Some(1));
    assert_eq!(Repeated::position_of::<str>(), None);
    assert_eq!(Nil::position_of::<u8>(), None);
}

#[test]
fn lookup_error_messages() {
    assert_eq!(LookupError::Empty { index: 3 }.to_string(), "Lookup of #3 in an empty list");
    assert_eq!(
        LookupError::OutOfRange { index: 5, len: 2 }.to_string(),
        "Index out of range: #5 (len: 2)"
    );
}

#[test]
fn short_names() {
    assert_eq!(short_type_name("i32"), "i32");
    assert_eq!(short_type_name("alloc::vec::Vec<alloc::string::String>"), "Vec<String>");
    assert_eq!(
        short_type_name("(core::option::Option<&str>, [u8; 4])"),
        "(Option<&str>, [u8; 4])"
    );
    assert_eq!(short_type_name("alloc::boxed::Box<dyn core::fmt::Debug>"), "Box<dyn Debug>");
}

#[test]
fn display_list() {
    assert_eq!(display::<Nil>().to_string(), "[]");
    assert_eq!(display::<Four>().to_string(), "[i32, f64, char, f32]");
    assert_eq!(display::<TypeList![Vec<String>]>().to_string(), "[Vec<String>]");
    assert_eq!(display::<TypeList![u8, u16]>().separator(" | ").to_string(), "[u8 | u16]");

    let config = DisplayConfig { short_names: false, separator: ",".to_owned() };
    let full = display::<TypeList![String, u8]>().with_config(config.clone()).to_string();
    assert_eq!(full, format!("[{},u8]", std::any::type_name::<String>()));
    assert_eq!(display::<Nil>().with_config(config.clone()).config(), &config);
}

#[test]
fn display_config_defaults() {
    let config = DisplayConfig::default();
    assert!(config.short_names);
    assert_eq!(config.separator, ", ");
}

#[cfg(feature = "serde")]
#[test]
fn display_config_serde_defaults() {
    let config: DisplayConfig = serde_json::from_str("{}").expect("all fields have defaults");
    assert_eq!(config, DisplayConfig::default());

    let config: DisplayConfig =
        serde_json::from_str(r#"{"separator": "; "}"#).expect("short_names has a default");
    assert_eq!(config.separator, "; ");
    assert!(config.short_names);
}

#[cfg(feature = "serde")]
#[test]
fn type_info_serializes_without_id() {
    let info = TypeInfo::of::<u8>(1);
    let json = serde_json::to_value(info).expect("TypeInfo is serializable");
    assert_eq!(json, serde_json::json!({"index": 1, "name": "u8"}));
}
