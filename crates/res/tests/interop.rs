use opt::Opt;
use res::Res;

#[test]
fn ok_or_builds_ok_from_some_and_err_from_none() {
    let present: Res<i32, &str> = Opt::some(1).ok_or("boom");
    assert_eq!(present, Res::Ok(1));
    assert_eq!(present.unwrap(), 1);

    let absent: Res<i32, &str> = Opt::<i32>::none().ok_or("boom");
    assert_eq!(absent, Res::Err("boom"));
    assert_eq!(absent.unwrap_err(), "boom");
}

#[test]
fn ok_or_else_computes_the_error_only_on_none() {
    let mut calls = 0;
    let present: Res<i32, &str> = Opt::some(1).ok_or_else(|| {
        calls += 1;
        "boom"
    });
    assert_eq!(present, Res::Ok(1));
    assert_eq!(calls, 0);

    let absent: Res<i32, &str> = Opt::<i32>::none().ok_or_else(|| "boom");
    assert_eq!(absent, Res::Err("boom"));
}

#[test]
fn transpose_inverts_opt_of_res() {
    let present: Res<Opt<i32>, &str> = Opt::some(Res::<i32, &str>::Ok(1)).transpose();
    assert_eq!(present, Res::Ok(Opt::some(1)));

    let failed: Res<Opt<i32>, &str> = Opt::some(Res::<i32, &str>::Err("e")).transpose();
    assert_eq!(failed, Res::Err("e"));

    let absent: Res<Opt<i32>, &str> = Opt::<Res<i32, &str>>::none().transpose();
    assert_eq!(absent, Res::Ok(Opt::none()));
}

#[test]
fn transpose_is_the_dual_of_ok_or() {
    let transposed: Res<Opt<i32>, &str> =
        Opt::some(1).map(|v| Res::<i32, &str>::Ok(v)).transpose();
    let wrapped: Res<i32, &str> = Opt::some(1).ok_or("e");
    assert_eq!(transposed, wrapped.map(Opt::some));
}

#[test]
fn res_reports_its_variant() {
    assert!(Res::<i32, &str>::Ok(1).is_ok());
    assert!(!Res::<i32, &str>::Ok(1).is_err());
    assert!(Res::<i32, &str>::Err("e").is_err());
    assert!(!Res::<i32, &str>::Err("e").is_ok());
}

#[test]
fn res_converts_each_variant_to_opt() {
    assert_eq!(Res::<i32, &str>::Ok(1).ok(), Opt::some(1));
    assert_eq!(Res::<i32, &str>::Err("e").ok(), Opt::none());
    assert_eq!(Res::<i32, &str>::Err("e").err(), Opt::some("e"));
    assert_eq!(Res::<i32, &str>::Ok(1).err(), Opt::none());
}

#[test]
fn map_and_map_err_touch_only_their_variant() {
    assert_eq!(Res::<i32, &str>::Ok(21).map(|x| x * 2), Res::Ok(42));
    assert_eq!(Res::<i32, &str>::Err("e").map(|x| x * 2), Res::Err("e"));
    assert_eq!(Res::<i32, &str>::Err("e").map_err(|e| e.len()), Res::Err(1));
    assert_eq!(Res::<i32, &str>::Ok(1).map_err(|e| e.len()), Res::Ok(1));
}

#[test]
#[should_panic(expected = "called `unwrap` on an `Err` value")]
fn unwrap_panics_on_err() {
    Res::<i32, &str>::Err("e").unwrap();
}

#[test]
#[should_panic(expected = "called `unwrap_err` on an `Ok` value")]
fn unwrap_err_panics_on_ok() {
    Res::<i32, &str>::Ok(1).unwrap_err();
}

#[test]
fn try_unwrap_reports_the_wrong_variant_as_a_typed_error() {
    assert_eq!(Res::<i32, &str>::Ok(1).try_unwrap(), Ok(1));
    let e = Res::<i32, &str>::Err("e").try_unwrap().unwrap_err();
    assert_eq!(e.message(), "called `unwrap` on an `Err` value");

    assert_eq!(Res::<i32, &str>::Err("e").try_unwrap_err(), Ok("e"));
    let e = Res::<i32, &str>::Ok(1).try_unwrap_err().unwrap_err();
    assert_eq!(e.message(), "called `unwrap_err` on an `Ok` value");
}
