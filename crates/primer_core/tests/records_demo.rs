use primer_core::db::StoreConfig;
use primer_core::demo::DemoError;
use primer_core::{RecordsDemo, RepoError};
use tempfile::TempDir;

fn demo_in(dir: &TempDir) -> RecordsDemo {
    RecordsDemo::new(StoreConfig::new(dir.path().join("records.sqlite3")))
}

fn printed(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).unwrap()
}

#[test]
fn each_operation_persists_through_fresh_connections() {
    let dir = tempfile::tempdir().unwrap();
    let demo = demo_in(&dir);

    let mut out = Vec::new();
    let added = demo.add("title a", "body a", &mut out).unwrap();
    demo.add("title b", "body b", &mut out).unwrap();
    assert_eq!(
        printed(out),
        "ADDED: Title: title a | Body: body a\nADDED: Title: title b | Body: body b\n"
    );

    let mut out = Vec::new();
    let listed = demo.get_all(&mut out).unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(printed(out), "title b\ntitle a\n");

    let mut out = Vec::new();
    demo.update(added.id, "title c", "body c", &mut out).unwrap();
    assert_eq!(printed(out), "UPDATED: Title: title c | Body: body c\n");

    let mut out = Vec::new();
    let fetched = demo.get_one(added.id, &mut out).unwrap().unwrap();
    assert_eq!(fetched.title, "title c");
    assert_eq!(printed(out), "Post Title\t: title c\nPost Body\t: body c\n");

    let mut out = Vec::new();
    demo.delete(added.id, &mut out).unwrap();
    assert_eq!(printed(out), "DELETED\n");

    let mut out = Vec::new();
    demo.get_all(&mut out).unwrap();
    assert_eq!(printed(out), "title b\n");
}

#[test]
fn get_one_missing_prints_empty_fields() {
    let dir = tempfile::tempdir().unwrap();
    let demo = demo_in(&dir);

    let mut out = Vec::new();
    assert!(demo.get_one(404, &mut out).unwrap().is_none());
    assert_eq!(printed(out), "Post Title\t: \nPost Body\t: \n");
}

#[test]
fn update_and_delete_of_missing_post_still_confirm() {
    let dir = tempfile::tempdir().unwrap();
    let demo = demo_in(&dir);

    let mut out = Vec::new();
    demo.update(99, "t", "b", &mut out).unwrap();
    demo.delete(99, &mut out).unwrap();
    assert_eq!(printed(out), "UPDATED: Title: t | Body: b\nDELETED\n");

    let mut out = Vec::new();
    assert!(demo.get_all(&mut out).unwrap().is_empty());
    assert!(out.is_empty());
}

#[test]
fn unopenable_store_surfaces_store_error() {
    let dir = tempfile::tempdir().unwrap();
    let demo = RecordsDemo::new(StoreConfig::new(dir.path().join("missing").join("x.sqlite3")));

    let mut out = Vec::new();
    let err = demo.delete(1, &mut out).unwrap_err();
    assert!(matches!(err, DemoError::Repo(RepoError::Db(_))));
    assert!(out.is_empty());
}

#[test]
fn walkthrough_prints_tutorial_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let demo = demo_in(&dir);

    let mut out = Vec::new();
    demo.run_walkthrough(&mut out).unwrap();

    let expected = "\
getAll ...
Welcome to Golang world
Hello Second World
Hello World
add ...
ADDED: Title: learn TerraTest | Body: very good tool for testing cloud infrastructure
learn TerraTest
Welcome to Golang world
Hello Second World
Hello World
update(1) ...
UPDATED: Title: learn go at exercism | Body: recommended by go tracker mentor John
learn TerraTest
Welcome to Golang world
Hello Second World
learn go at exercism
delete(2) ...
DELETED
learn TerraTest
Welcome to Golang world
learn go at exercism
getOne(3) ...
Post Title\t: Welcome to Golang world
Post Body\t: Golang is an interesting programming lang
";
    assert_eq!(printed(out), expected);
}

#[test]
fn walkthrough_replay_confirms_missing_delete_target() {
    let dir = tempfile::tempdir().unwrap();
    let demo = demo_in(&dir);

    demo.run_walkthrough(&mut Vec::<u8>::new()).unwrap();
    assert_eq!(demo.seed_if_empty().unwrap(), 0);

    let mut out = Vec::new();
    demo.run_walkthrough(&mut out).unwrap();
    let text = printed(out);
    assert!(text.contains("delete(2) ...\nDELETED\n"));
    assert_eq!(text.matches("learn TerraTest\n").count(), 7);
}
