use super::*;

#[test]
fn process_ids_never_repeat() {
    let ids = ProcessIds;
    let a = ids.next_id();
    let b = ids.next_id();
    let c = ProcessIds.next_id();
    assert!(a != b && b != c && a != c);
}

#[test]
fn sequential_ids_are_deterministic() {
    let ids = SequentialIds::starting_at(7);
    assert_eq!(ids.next_id(), InstanceId(7));
    assert_eq!(ids.next_id(), InstanceId(8));
    assert_eq!(SequentialIds::default().next_id(), InstanceId(1));
}

#[test]
fn gradient_id_is_scoped_by_instance() {
    assert_eq!(InstanceId(3).gradient_id(), "beam-gradient-3");
    assert_ne!(InstanceId(3).gradient_id(), InstanceId(4).gradient_id());
}
