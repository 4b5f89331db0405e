//! Full names computed by the file-system tree.

use hiername::{FileSystem, Name, NodeKind};

#[test]
fn test_full_names_from_root() {
    let mut fs = FileSystem::new();
    let home = fs.add_directory(fs.root(), "home").unwrap();
    let user = fs.add_directory(home, "dirk").unwrap();
    let file = fs.add_file(user, "notes.txt").unwrap();

    let full = fs.full_name(file).unwrap();
    assert_eq!(full.as_string(), "/home/dirk/notes.txt");
    assert_eq!(full.components(), vec!["", "home", "dirk", "notes.txt"]);
    assert_eq!(full.as_data_string(), r".home.dirk.notes\.txt");
    assert_eq!(fs.kind(file).unwrap(), NodeKind::File);
}

#[test]
fn test_rename_changes_descendant_full_names() {
    let mut fs = FileSystem::new();
    let usr = fs.add_directory(fs.root(), "usr").unwrap();
    let bin = fs.add_directory(usr, "bin").unwrap();

    fs.rename(usr, "opt").unwrap();
    assert_eq!(fs.full_name(bin).unwrap().as_string(), "/opt/bin");
}

#[test]
fn test_link_full_name_uses_target_base_name() {
    let mut fs = FileSystem::new();
    let bin = fs.add_directory(fs.root(), "bin").unwrap();
    let ls = fs.add_file(bin, "ls").unwrap();
    let link = fs.add_link(fs.root(), "list", Some(ls)).unwrap();

    assert_eq!(fs.full_name(link).unwrap().as_string(), "/ls");
    assert_eq!(fs.find_nodes(fs.root(), "ls").unwrap(), vec![ls, link]);
    assert!(fs.find_nodes(fs.root(), "list").unwrap().is_empty());
}
