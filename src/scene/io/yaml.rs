use std::{
    collections::{HashMap, HashSet},
    f64::consts,
};

use derive_builder::Builder;
use log::{debug, warn};
use saphyr::Yaml;

use crate::{
    error::Error,
    math::{
        color::Color,
        matrix::Matrix4,
        point::Point,
        transform::{Transformation, Transformations},
        tuple::{Axis, Tuple},
    },
    scene::{
        Scene, SceneBuilder,
        light::PointLightSource,
        object::{
            material::{Material, MaterialBuilder},
            sphere::Sphere,
        },
    },
};

/// The output of the parser. The scene is kept as a builder, because the cli
/// options can still override what the file says.
#[derive(Debug, Builder)]
pub struct YamlSceneConfig {
    #[builder(setter(strip_option), default = "None")]
    pub width: Option<usize>,
    #[builder(setter(strip_option), default = "None")]
    pub height: Option<usize>,

    #[builder(field(ty = "SceneBuilder", build = "self.scene_builder.clone()"))]
    pub scene_builder: SceneBuilder,
}

impl YamlSceneConfig {
    pub fn build_scene(&self) -> Result<Scene, Error> {
        Ok(self.scene_builder.build()?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum YamlParseError {
    #[error("missing field `{0}`")]
    MissingField(String),
    #[error("invalid value of `{0}`")]
    InvalidField(String),
    #[error("every entry of the scene list must be a mapping starting with an operation")]
    UnexpectedValue,
    #[error("unknown define `{0}`")]
    UnknownDefine(String),
    #[error("unknown variant `{0}`")]
    UnknownVariant(String),
    #[error("yaml syntax error: {0}")]
    YamlSyntaxError(String),
    #[error("the scene file must contain a single yaml document")]
    MultipleDocuments,
    #[error(transparent)]
    Scene(#[from] Error),
}

type YamlParseResult<T> = Result<T, YamlParseError>;

fn predefined_defines() -> HashMap<String, Yaml> {
    let number = |value: f64| Yaml::Real(value.to_string());
    let color = |c: Color| Yaml::Array(vec![number(c.r()), number(c.g()), number(c.b())]);

    [
        ("PI", number(consts::PI)),
        ("2_PI", number(consts::TAU)),
        ("FRAC_PI_2", number(consts::FRAC_PI_2)),
        ("FRAC_PI_3", number(consts::FRAC_PI_3)),
        ("FRAC_PI_4", number(consts::FRAC_PI_4)),
        ("FRAC_PI_6", number(consts::FRAC_PI_6)),
        ("FRAC_1_SQRT_2", number(consts::FRAC_1_SQRT_2)),
        ("WHITE", color(Color::white())),
        ("BLACK", color(Color::black())),
        ("RED", color(Color::red())),
        ("GREEN", color(Color::green())),
        ("BLUE", color(Color::blue())),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect()
}

macro_rules! parse_optional_field {
    ($self:ident, $yaml_body:ident, $builder:ident, $field:ident) => {
        parse_optional_field!($self, $yaml_body, $builder, stringify!($field), $field);
    };
    ($self:ident, $yaml_body:ident, $builder:ident, $yaml_field:expr, $field_name:ident) => {
        match &$yaml_body[$yaml_field] {
            Yaml::BadValue => {}
            val => {
                $builder.$field_name($self.parse_num(val)?);
            }
        }
    };
}

macro_rules! call_with_n_first_values {
    ($values:ident, 3, $func:path) => {
        $func($values[0], $values[1], $values[2])
    };
    ($values:ident, 6, $func:path) => {
        $func(
            $values[0], $values[1], $values[2], $values[3], $values[4], $values[5],
        )
    };
}

macro_rules! parse_transformation {
    ($kind_name:expr, $kind:ident, $values:ident, $n:tt) => {
        if $values.len() != $n {
            Err(YamlParseError::InvalidField(format!(
                "{} takes {} values",
                $kind_name, $n
            )))
        } else {
            Ok(call_with_n_first_values!(
                $values,
                $n,
                Transformation::$kind
            ))
        }
    };
}

macro_rules! rotation_transformation {
    ($kind_name:expr, $axis:expr, $values:ident) => {
        if $values.len() != 1 {
            Err(YamlParseError::InvalidField(format!(
                "{} takes 1 value",
                $kind_name
            )))
        } else {
            Ok(Transformation::Rotation($axis, $values[0]))
        }
    };
}

pub struct YamlParser<'a> {
    yaml: &'a Yaml,
    result: YamlSceneConfigBuilder,
    defines: HashMap<String, Yaml>,
    light_added: bool,
}

impl<'a> YamlParser<'a> {
    pub fn new(yaml: &'a Yaml) -> Self {
        Self {
            yaml,
            result: YamlSceneConfigBuilder::default(),
            defines: predefined_defines(),
            light_added: false,
        }
    }

    fn required<'b>(body: &'b Yaml, key: &str) -> YamlParseResult<&'b Yaml> {
        match &body[key] {
            Yaml::BadValue => Err(YamlParseError::MissingField(key.to_string())),
            val => Ok(val),
        }
    }

    fn define(&self, name: &str) -> YamlParseResult<&Yaml> {
        self.defines
            .get(name)
            .ok_or_else(|| YamlParseError::UnknownDefine(name.to_string()))
    }

    fn parse_num(&self, value: &Yaml) -> YamlParseResult<f64> {
        match value {
            Yaml::Integer(value) => Ok(*value as f64),
            Yaml::Real(value) => value
                .parse()
                .map_err(|_| YamlParseError::InvalidField(value.clone())),
            Yaml::String(name) => {
                if let Some(name) = name.strip_prefix('-') {
                    return self
                        .parse_num(&Yaml::String(name.to_string()))
                        .map(|v| -v);
                }
                self.parse_num(self.define(name)?)
            }
            _ => Err(YamlParseError::InvalidField(format!("{value:?}"))),
        }
    }

    fn parse_usize(&self, value: &Yaml, key: &str) -> YamlParseResult<usize> {
        let num = self.parse_num(value)?;
        if !num.is_finite() || num < 0. || num.fract() != 0. {
            return Err(YamlParseError::InvalidField(key.to_string()));
        }
        Ok(num as usize)
    }

    fn parse_vec3(&self, value: &Yaml, key: &str) -> YamlParseResult<(f64, f64, f64)> {
        let vec = value
            .as_vec()
            .ok_or_else(|| YamlParseError::InvalidField(key.to_string()))?;
        if vec.len() != 3 {
            return Err(YamlParseError::InvalidField(key.to_string()));
        }
        Ok((
            self.parse_num(&vec[0])?,
            self.parse_num(&vec[1])?,
            self.parse_num(&vec[2])?,
        ))
    }

    fn parse_point(&self, value: &Yaml, key: &str) -> YamlParseResult<Point> {
        let (x, y, z) = self.parse_vec3(value, key)?;
        Ok(Point::new(x, y, z))
    }

    fn parse_color(&self, value: &Yaml, key: &str) -> YamlParseResult<Color> {
        if let Yaml::String(name) = value {
            return self.parse_color(self.define(name)?, key);
        }
        let (r, g, b) = self.parse_vec3(value, key)?;
        Ok(Color::new(r, g, b))
    }

    fn parse_light(&self, body: &Yaml) -> YamlParseResult<PointLightSource> {
        let at = self.parse_point(Self::required(body, "at")?, "at")?;
        let intensity = self.parse_color(Self::required(body, "intensity")?, "intensity")?;

        Ok(PointLightSource::new(at, intensity))
    }

    fn parse_material(&self, body: &Yaml) -> YamlParseResult<Material> {
        match body {
            Yaml::BadValue => return Ok(Material::default()),
            Yaml::String(name) => return self.parse_material(self.define(name)?),
            Yaml::Hash(_) => {}
            _ => return Err(YamlParseError::InvalidField("material".to_string())),
        }
        let mut builder = MaterialBuilder::default();

        match &body["color"] {
            Yaml::BadValue => {}
            val => {
                builder.color(self.parse_color(val, "color")?);
            }
        }
        parse_optional_field!(self, body, builder, ambient);
        parse_optional_field!(self, body, builder, diffuse);
        parse_optional_field!(self, body, builder, specular);
        parse_optional_field!(self, body, builder, shininess);

        builder
            .build()
            .map_err(|err| YamlParseError::Scene(err.into()))
    }

    fn parse_singular_transformation(&self, body: &Yaml) -> YamlParseResult<Transformation> {
        let values = body
            .as_vec()
            .ok_or_else(|| YamlParseError::InvalidField("transform".to_string()))?;
        let (kind, values) = values
            .split_first()
            .ok_or_else(|| YamlParseError::MissingField("transform kind".to_string()))?;
        let kind = kind
            .as_str()
            .ok_or_else(|| YamlParseError::InvalidField("transform kind".to_string()))?;
        let values = values
            .iter()
            .map(|v| self.parse_num(v))
            .collect::<YamlParseResult<Vec<f64>>>()?;

        match kind {
            "translate" => parse_transformation!(kind, Translation, values, 3),
            "scale" => parse_transformation!(kind, Scaling, values, 3),
            "scale-uniform" => {
                let values = match values.as_slice() {
                    &[factor] => vec![factor; 3],
                    _ => values,
                };
                parse_transformation!(kind, Scaling, values, 3)
            }
            "rotate-x" => rotation_transformation!(kind, Axis::X, values),
            "rotate-y" => rotation_transformation!(kind, Axis::Y, values),
            "rotate-z" => rotation_transformation!(kind, Axis::Z, values),
            "shear" => parse_transformation!(kind, Shearing, values, 6),
            _ => Err(YamlParseError::UnknownVariant(kind.to_string())),
        }
    }

    fn parse_transformations(&self, body: &Yaml) -> YamlParseResult<Transformations> {
        match body {
            Yaml::BadValue => Ok(Transformations::new()),
            Yaml::String(name) => self.parse_transformations(self.define(name)?),
            Yaml::Array(arr) => {
                let mut res = Transformations::new();
                for val in arr {
                    match val {
                        Yaml::String(name) => {
                            for t in self.parse_transformations(self.define(name)?)?.vec() {
                                res.push(*t);
                            }
                        }
                        _ => res.push(self.parse_singular_transformation(val)?),
                    }
                }
                Ok(res)
            }
            _ => Err(YamlParseError::InvalidField("transform".to_string())),
        }
    }

    fn parse_sphere(&self, body: &Yaml) -> YamlParseResult<Sphere> {
        let material = self.parse_material(&body["material"])?;
        let transformations = self.parse_transformations(&body["transform"])?;

        let mut sphere =
            Sphere::with_transformation(Matrix4::from(&transformations))?.with_material(material);
        match &body["position"] {
            Yaml::BadValue => {}
            val => sphere.set_position(self.parse_point(val, "position")?),
        }
        Ok(sphere)
    }

    fn parse_options(&mut self, body: &Yaml) -> YamlParseResult<()> {
        match &body["width"] {
            Yaml::BadValue => {}
            val => {
                self.result.width(self.parse_usize(val, "width")?);
            }
        }
        match &body["height"] {
            Yaml::BadValue => {}
            val => {
                self.result.height(self.parse_usize(val, "height")?);
            }
        }
        match &body["eye"] {
            Yaml::BadValue => {}
            val => {
                let eye = self.parse_point(val, "eye")?;
                self.result.scene_builder.eye(eye);
            }
        }
        match &body["wall-z"] {
            Yaml::BadValue => {}
            val => {
                let wall_z = self.parse_num(val)?;
                self.result.scene_builder.wall_z(wall_z);
            }
        }
        match &body["wall-size"] {
            Yaml::BadValue => {}
            val => {
                let wall_size = self.parse_num(val)?;
                self.result.scene_builder.wall_size(wall_size);
            }
        }
        match &body["background"] {
            Yaml::BadValue => {}
            val => {
                let background = self.parse_color(val, "background")?;
                self.result.scene_builder.background(background);
            }
        }
        Ok(())
    }

    fn parse_add(&mut self, what: &str, body: &Yaml) -> YamlParseResult<()> {
        match what {
            "light" => {
                let light = self.parse_light(body)?;
                if self.light_added {
                    warn!("scene adds more than one light, only the last one is used");
                }
                self.light_added = true;
                self.result.scene_builder.light(light);
            }
            "sphere" => {
                let sphere = self.parse_sphere(body)?;
                self.result.scene_builder.add_object(sphere);
            }
            other => return Err(YamlParseError::UnknownVariant(other.to_string())),
        }
        Ok(())
    }

    /// Names of defines `value` may point at: every string scalar in it,
    /// without a negating `-`. Mapping keys are field names, not references.
    fn referenced_names(value: &Yaml) -> Vec<&str> {
        match value {
            Yaml::String(name) => vec![name.trim_start_matches('-')],
            Yaml::Array(values) => values.iter().flat_map(Self::referenced_names).collect(),
            Yaml::Hash(hash) => hash.values().flat_map(Self::referenced_names).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether resolving `value` through the current defines would ever reach `target`.
    fn reaches_define(&self, value: &Yaml, target: &str) -> bool {
        let mut visited = HashSet::new();
        let mut pending = Self::referenced_names(value);
        while let Some(name) = pending.pop() {
            if name == target {
                return true;
            }
            if !visited.insert(name) {
                continue;
            }
            if let Some(body) = self.defines.get(name) {
                pending.extend(Self::referenced_names(body));
            }
        }
        false
    }

    /// Rejects a define that would refer back to itself, directly or through
    /// other defines. The defines stay acyclic, so resolving them always ends.
    fn parse_define(&mut self, name: &str, body: &Yaml) -> YamlParseResult<()> {
        if body.is_badvalue() {
            return Err(YamlParseError::MissingField("value".to_string()));
        }
        if self.reaches_define(body, name) {
            return Err(YamlParseError::InvalidField(name.to_string()));
        }
        if self
            .defines
            .insert(name.to_string(), body.clone())
            .is_some()
        {
            debug!("define `{name}` overrides an earlier one");
        }
        Ok(())
    }

    fn parse_operation(&mut self, yaml_obj: &Yaml) -> YamlParseResult<()> {
        let Yaml::Hash(hash) = yaml_obj else {
            return Err(YamlParseError::UnexpectedValue);
        };
        match hash.front() {
            Some((Yaml::String(operation), Yaml::String(what))) => match operation.as_str() {
                "add" => self.parse_add(what, yaml_obj),
                "define" => self.parse_define(what, &yaml_obj["value"]),
                other => Err(YamlParseError::UnknownVariant(other.to_string())),
            },
            Some((Yaml::String(operation), Yaml::Null)) if operation == "options" => {
                self.parse_options(yaml_obj)
            }
            _ => Err(YamlParseError::UnexpectedValue),
        }
    }

    pub fn parse(mut self) -> YamlParseResult<YamlSceneConfig> {
        let yaml = self.yaml;
        if let Some(operations) = yaml.as_vec() {
            for yaml_obj in operations {
                self.parse_operation(yaml_obj)?;
            }
        } else if !matches!(yaml, Yaml::Null) {
            return Err(YamlParseError::UnexpectedValue);
        }

        self.result
            .build()
            .map_err(|err| YamlParseError::Scene(Error::InvalidScene(err.to_string())))
    }
}

fn str_to_yaml(source: &str) -> YamlParseResult<Yaml> {
    let mut docs = Yaml::load_from_str(source)
        .map_err(|err| YamlParseError::YamlSyntaxError(err.to_string()))?;
    match docs.len() {
        0 => Ok(Yaml::Array(vec![])),
        1 => Ok(docs.swap_remove(0)),
        _ => Err(YamlParseError::MultipleDocuments),
    }
}

pub fn parse_str(source: &str) -> YamlParseResult<YamlSceneConfig> {
    let yaml = str_to_yaml(source)?;
    let config = YamlParser::new(&yaml).parse()?;
    debug!(
        "parsed scene file: width {:?}, height {:?}",
        config.width, config.height
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;
    use crate::{
        assert_approx_eq,
        math::transform::Transform,
        scene::object::Shape,
    };

    fn test_parse(source: &str) -> (Scene, YamlSceneConfig) {
        let config = parse_str(source).unwrap();
        (config.build_scene().unwrap(), config)
    }

    fn only_sphere(scene: &Scene) -> &Sphere {
        assert_eq!(scene.objects().len(), 1);
        scene.objects()[0].as_sphere().unwrap()
    }

    #[test]
    fn empty_yaml() {
        let (scene, config) = test_parse("");
        assert_eq!(scene, Scene::default());
        assert_eq!(config.width, None);
        assert_eq!(config.height, None);
    }

    #[test]
    fn comments_are_supported() {
        let (scene, _) = test_parse("# nothing to see here");
        assert_eq!(scene, Scene::default());
    }

    #[test]
    fn parse_light() {
        let (scene, _) = test_parse(
            r#"
- add: light
  at: [ 50, 100, -50 ]
  intensity: [ 1, 1, 1 ]
"#,
        );
        let expected = PointLightSource::new(Point::new(50., 100., -50.), Color::white());
        assert_eq!(*scene.light(), expected);
    }

    #[test]
    fn last_light_wins() {
        let (scene, _) = test_parse(
            r#"
- add: light
  at: [ 1, 1, 1 ]
  intensity: WHITE
- add: light
  at: [ 2, 2, 2 ]
  intensity: RED
"#,
        );
        assert_eq!(
            *scene.light(),
            PointLightSource::new(Point::new(2., 2., 2.), Color::red())
        );
    }

    #[test]
    fn parse_options() {
        let (scene, config) = test_parse(
            r#"
- options:
  width: 320
  height: 200
  eye: [ 0, 1, -6 ]
  wall-z: 12
  wall-size: 8.5
  background: BLUE
"#,
        );
        assert_eq!(config.width, Some(320));
        assert_eq!(config.height, Some(200));
        assert_eq!(scene.eye(), Point::new(0., 1., -6.));
        assert_eq!(scene.wall_z(), 12.);
        assert_eq!(scene.wall_size(), 8.5);
        assert_eq!(scene.background(), Color::blue());
    }

    #[test]
    fn parse_default_sphere() {
        let (scene, _) = test_parse("- add: sphere");
        assert_eq!(only_sphere(&scene), &Sphere::new());
    }

    #[test]
    fn parse_sphere_with_material_and_position() {
        let (scene, _) = test_parse(
            r#"
- add: sphere
  position: [ 0, 0, 2 ]
  material:
    color: [ 1, 0.2, 1 ]
    ambient: 0.2
    diffuse: 0.7
    specular: 0.3
    shininess: 50
"#,
        );
        let sphere = only_sphere(&scene);
        let expected = Material {
            color: Color::new(1., 0.2, 1.),
            ambient: 0.2,
            diffuse: 0.7,
            specular: 0.3,
            shininess: 50.,
        };

        assert_eq!(*sphere.material(), expected);
        assert_eq!(sphere.position(), Point::new(0., 0., 2.));
    }

    #[test]
    fn partial_material_keeps_defaults() {
        let (scene, _) = test_parse(
            r#"
- add: sphere
  material:
    color: RED
"#,
        );
        assert_eq!(
            *only_sphere(&scene).material(),
            Material::with_color(Color::red())
        );
    }

    #[test]
    fn transformations_apply_in_listed_order() {
        let (scene, _) = test_parse(
            r#"
- add: sphere
  transform:
    - [ scale, 2, 1, 1 ]
    - [ rotate-x, PI ]
    - [ rotate-y, -FRAC_PI_2 ]
    - [ rotate-z, FRAC_PI_4 ]
    - [ scale-uniform, 0.5 ]
    - [ shear, 1, 0, 0, 0, 0, 0 ]
    - [ translate, 1, 2, 3 ]
"#,
        );
        let expected = Matrix4::scaling(2., 1., 1.)
            .rotate_x(PI)
            .rotate_y(-FRAC_PI_2)
            .rotate_z(FRAC_PI_4)
            .scale_uniform(0.5)
            .sheare(1., 0., 0., 0., 0., 0.)
            .translate(1., 2., 3.)
            .transformed();

        assert_approx_eq!(*only_sphere(&scene).transformation(), expected);
    }

    #[test]
    fn user_defines() {
        let (scene, _) = test_parse(
            r#"
- define: BIG
  value: 3
- define: PINK
  value: [ 1, 0.2, 1 ]
- define: SHINY_PINK
  value:
    color: PINK
    shininess: 300
- define: GROW
  value:
    - [ scale-uniform, BIG ]
- add: sphere
  material: SHINY_PINK
  transform:
    - GROW
    - [ translate, -BIG, 0, 0 ]
"#,
        );
        let sphere = only_sphere(&scene);

        assert_eq!(sphere.material().color, Color::new(1., 0.2, 1.));
        assert_eq!(sphere.material().shininess, 300.);
        assert_approx_eq!(
            *sphere.transformation(),
            Matrix4::scaling_uniform(3.)
                .translate(-3., 0., 0.)
                .transformed()
        );
    }

    #[test]
    fn sample_scene_file() {
        let (scene, config) = test_parse(include_str!("../../../scenes/shading.yml"));

        assert_eq!(config.width, Some(100));
        assert_eq!(config.height, Some(100));
        assert_eq!(scene.objects().len(), 1);
        assert!(matches!(scene.objects()[0], Shape::Sphere(_)));
        assert_eq!(
            *scene.light(),
            PointLightSource::new(Point::new(-10., 10., -10.), Color::white())
        );
    }

    #[test]
    fn unknown_object_is_an_error() {
        assert!(matches!(
            parse_str("- add: cube"),
            Err(YamlParseError::UnknownVariant(name)) if name == "cube"
        ));
    }

    #[test]
    fn unknown_define_is_an_error() {
        assert!(matches!(
            parse_str("- add: sphere\n  material: GLASS"),
            Err(YamlParseError::UnknownDefine(name)) if name == "GLASS"
        ));
    }

    #[test]
    fn light_without_position_is_an_error() {
        assert!(matches!(
            parse_str("- add: light\n  intensity: WHITE"),
            Err(YamlParseError::MissingField(name)) if name == "at"
        ));
    }

    #[test]
    fn wrong_arity_is_an_error() {
        assert!(matches!(
            parse_str("- add: sphere\n  transform:\n    - [ translate, 1, 2 ]"),
            Err(YamlParseError::InvalidField(_))
        ));
        assert!(matches!(
            parse_str("- add: light\n  at: [ 1, 2 ]\n  intensity: WHITE"),
            Err(YamlParseError::InvalidField(_))
        ));
    }

    #[test]
    fn singular_transformation_is_an_error() {
        assert!(matches!(
            parse_str("- add: sphere\n  transform:\n    - [ scale, 0, 1, 1 ]"),
            Err(YamlParseError::Scene(Error::NonInvertibleMatrix))
        ));
    }

    #[test]
    fn invalid_material_is_an_error() {
        assert!(matches!(
            parse_str("- add: sphere\n  material:\n    ambient: -1"),
            Err(YamlParseError::Scene(Error::InvalidScene(_)))
        ));
    }

    #[test]
    fn invalid_wall_fails_on_build() {
        let config = parse_str("- options:\n  wall-size: 0").unwrap();
        assert!(matches!(config.build_scene(), Err(Error::InvalidScene(_))));
    }

    #[test]
    fn negative_width_is_an_error() {
        assert!(matches!(
            parse_str("- options:\n  width: -3"),
            Err(YamlParseError::InvalidField(_))
        ));
    }

    #[test]
    fn multiple_documents_are_an_error() {
        assert!(matches!(
            parse_str("- add: sphere\n---\n- add: sphere"),
            Err(YamlParseError::MultipleDocuments)
        ));
    }

    #[test]
    fn syntax_error() {
        assert!(matches!(
            parse_str("- add: [sphere"),
            Err(YamlParseError::YamlSyntaxError(_))
        ));
    }

    #[test]
    fn define_referring_to_itself_in_a_list_is_an_error() {
        assert!(matches!(
            parse_str("- define: T\n  value:\n    - T\n- add: sphere\n  transform: T\n"),
            Err(YamlParseError::InvalidField(name)) if name == "T"
        ));
        assert!(matches!(
            parse_str("- define: N\n  value: -N"),
            Err(YamlParseError::InvalidField(name)) if name == "N"
        ));
    }

    #[test]
    fn mutually_referring_defines_are_an_error() {
        let source = r#"
- define: A
  value: B
- define: B
  value: A
- add: sphere
  transform:
    - [ scale-uniform, A ]
"#;
        assert!(matches!(
            parse_str(source),
            Err(YamlParseError::InvalidField(name)) if name == "B"
        ));
    }

    #[test]
    fn redefining_into_a_cycle_is_an_error() {
        let source = r#"
- define: SIZE
  value: 2
- define: GROW
  value:
    - [ scale-uniform, SIZE ]
- define: SIZE
  value:
    material: GROW
"#;
        assert!(matches!(
            parse_str(source),
            Err(YamlParseError::InvalidField(name)) if name == "SIZE"
        ));
    }

    #[test]
    fn define_may_use_a_later_define() {
        let (scene, _) = test_parse(
            r#"
- define: HALF
  value: SMALL
- define: SMALL
  value: 0.5
- add: sphere
  transform:
    - [ scale-uniform, HALF ]
"#,
        );
        assert_approx_eq!(
            *only_sphere(&scene).transformation(),
            Matrix4::scaling_uniform(0.5)
        );
    }

    #[test]
    fn non_list_document_is_an_error() {
        assert!(matches!(
            parse_str("add: sphere"),
            Err(YamlParseError::UnexpectedValue)
        ));
    }
}
