use planetlab_workload::core::load_model::{ConstantLoadModel, LoadModel, ZeroLoadModel};

#[test]
fn test_zero_load_model() {
    let model: Box<dyn LoadModel> = Box::new(ZeroLoadModel::new());

    assert_eq!(model.get_resource_load(0., 0.), 0.);
    assert_eq!(model.get_resource_load(1000., 500.), 0.);
}

#[test]
fn test_constant_load_model() {
    let model: Box<dyn LoadModel> = Box::new(ConstantLoadModel::new(0.8));
    let copy = model.clone();

    assert_eq!(model.get_resource_load(0., 0.), 0.8);
    assert_eq!(copy.get_resource_load(1000., 500.), 0.8);
}
