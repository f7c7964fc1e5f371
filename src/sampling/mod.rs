pub(crate) mod path_sampler;
