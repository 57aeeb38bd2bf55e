use trobust_core::Operation;

pub type Op = Operation<&'static str, &'static str, &'static str>;

pub fn read(variable: &'static str, relation: &'static str, attrs: &[&'static str]) -> Op {
    Operation::read(variable, relation, attrs.iter().copied())
}

pub fn read_write(variable: &'static str, relation: &'static str, reads: &[&'static str], writes: &[&'static str]) -> Op {
    Operation::read_write(variable, relation, reads.iter().copied(), writes.iter().copied())
}
