use std::cell::RefCell;
use std::rc::Rc;
use userlist_core::{
    saved_name_line, saved_occupation_line, EventError, NewUser, User, UserList, SAVED_USER_EVENT,
};

#[test]
fn seeded_demo_scenario_produces_expected_lines() {
    let mut users = UserList::seeded_demo();
    let lines: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let name_sink = Rc::clone(&lines);
    users.on_saved(move |user| name_sink.borrow_mut().push(saved_name_line(user)));
    let occupation_sink = Rc::clone(&lines);
    users
        .subscribe(SAVED_USER_EVENT, move |user| {
            occupation_sink
                .borrow_mut()
                .push(saved_occupation_line(user))
        })
        .unwrap();

    let jason = users.save(NewUser::new("Jason Frick", "Project Manager"));
    assert_eq!(jason.id, 4);
    assert_eq!(
        *lines.borrow(),
        vec![
            "user name saved: Jason Frick (4)",
            "user occupation: Project Manager",
        ]
    );

    let alyssa = users.save(NewUser::new("Alyssa Bradley", "Sr. SCRUM Master"));
    assert_eq!(alyssa.id, 5);
    assert_eq!(lines.borrow().len(), 4);
    assert_eq!(lines.borrow()[2], "user name saved: Alyssa Bradley (5)");
    assert_eq!(users.all().len(), 5);
}

#[test]
fn ids_are_strictly_increasing_from_one() {
    let mut users = UserList::new();

    let ids: Vec<u64> = (0..10)
        .map(|n| users.save(NewUser::new(format!("user-{n}"), "tester")).id)
        .collect();

    assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn all_returns_records_in_insertion_order() {
    let mut users = UserList::new();
    let names = ["Ada", "Grace", "Linus"];
    for name in names {
        users.save(NewUser::new(name, "engineer"));
    }

    let stored: Vec<&str> = users.all().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(stored, names);
    assert_eq!(users.get(2).map(|u| u.name.as_str()), Some("Grace"));
}

#[test]
fn every_listener_runs_once_per_save_with_the_stored_record() {
    let mut users = UserList::new();
    let seen: Rc<RefCell<Vec<(usize, User)>>> = Rc::new(RefCell::new(Vec::new()));

    for index in 0..3 {
        let seen = Rc::clone(&seen);
        users.on_saved(move |user| seen.borrow_mut().push((index, user.clone())));
    }

    let first = users.save(NewUser::new("a", "x"));
    let second = users.save(NewUser::new("b", "y"));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 6);
    let order: Vec<usize> = seen.iter().map(|(index, _)| *index).collect();
    assert_eq!(order, vec![0, 1, 2, 0, 1, 2]);
    assert!(seen[..3].iter().all(|(_, user)| *user == first));
    assert!(seen[3..].iter().all(|(_, user)| *user == second));
}

#[test]
fn listener_sees_record_already_stored() {
    let users = Rc::new(RefCell::new(Vec::<u64>::new()));
    let mut list = UserList::seeded_demo();
    let observed = Rc::clone(&users);
    list.on_saved(move |user| observed.borrow_mut().push(user.id));

    let saved = list.save(NewUser::new("Jason Frick", "Project Manager"));

    assert_eq!(*users.borrow(), vec![saved.id]);
    assert_eq!(list.all().last(), Some(&saved));
}

#[test]
fn save_without_listeners_still_stores() {
    let mut users = UserList::new();
    let saved = users.save(NewUser::new("solo", "none"));

    assert_eq!(saved.id, 1);
    assert_eq!(users.all(), &[saved]);
}

#[test]
fn listeners_for_other_events_are_not_invoked() {
    let mut users = UserList::new();
    let calls = Rc::new(RefCell::new(0_u32));
    let counter = Rc::clone(&calls);
    users
        .subscribe("deleted-user", move |_| *counter.borrow_mut() += 1)
        .unwrap();

    users.save(NewUser::new("a", "x"));

    assert_eq!(*calls.borrow(), 0);
    assert_eq!(users.listener_count("deleted-user"), 1);
    assert_eq!(users.listener_count(SAVED_USER_EVENT), 0);
}

#[test]
fn subscribe_rejects_blank_event_name() {
    let mut users = UserList::new();
    let err = users.subscribe("", |_| {}).unwrap_err();
    assert_eq!(err, EventError::InvalidEventName(String::new()));
}

#[test]
fn independent_stores_do_not_share_ids() {
    let mut left = UserList::seeded_demo();
    let mut right = UserList::new();

    assert_eq!(left.save(NewUser::new("a", "x")).id, 4);
    assert_eq!(right.save(NewUser::new("b", "y")).id, 1);
    assert_eq!(left.len(), 4);
    assert_eq!(right.len(), 1);
}

#[test]
fn user_serializes_with_expected_fields() {
    let mut users = UserList::new();
    let saved = users.save(NewUser::new("Jason Frick", "Project Manager"));

    let json = serde_json::to_value(&saved).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Jason Frick");
    assert_eq!(json["occupation"], "Project Manager");

    let decoded: User = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, saved);
}
