/// Vertex transform that rasterizes the mesh in its second UV set.
///
/// Replaces the position output so every texel of the lightmap receives
/// the lighting of the surface point mapped to it.
pub const TRANSFORM_UV1_VS: &str = "
mat4 getModelMatrix() {
    return matrix_model;
}

vec4 getPosition() {
    dModelMatrix = getModelMatrix();
    vec4 posW = dModelMatrix * vec4(vertex_position, 1.0);
    dPositionW = posW.xyz;
    return vec4(vertex_texCoord1.xy * 2.0 - 1.0, 0.5, 1.0);
}

vec3 getWorldPosition() {
    return dPositionW;
}
";

/// Fragment tail: adds the previous accumulation and encodes to RGBM.
///
/// On the first light `LIGHTMAP` is off, so only this light's diffuse
/// term is written. Later lights read the previous result from
/// `texture_lightMap`.
pub const BAKE_LM_END_PS: &str = "
#ifdef LIGHTMAP
    dDiffuseLight += decodeRGBM(texture2D(texture_lightMap, vUv1));
#endif
    gl_FragColor.rgb = dDiffuseLight;
    gl_FragColor.rgb = pow(gl_FragColor.rgb, vec3(0.5));
    gl_FragColor.rgb /= 8.0;
    gl_FragColor.a = clamp(max(max(gl_FragColor.r, gl_FragColor.g), max(gl_FragColor.b, 1.0 / 255.0)), 0.0, 1.0);
    gl_FragColor.a = ceil(gl_FragColor.a * 255.0) / 255.0;
    gl_FragColor.rgb /= gl_FragColor.a;
";

/// Full-screen quad vertex stage
pub const FULLSCREEN_QUAD_VS: &str = "
attribute vec2 aPosition;

varying vec2 vUv0;

void main(void) {
    gl_Position = vec4(aPosition, 0.5, 1.0);
    vUv0 = aPosition.xy * 0.5 + 0.5;
}
";

/// Dilation: empty texels (alpha 0) take the first filled neighbour
pub const DILATE_PS: &str = "
precision highp float;

varying vec2 vUv0;

uniform sampler2D source;
uniform vec2 pixelOffset;

void main(void) {
    vec4 c = texture2D(source, vUv0);
    c = c.a > 0.0 ? c : texture2D(source, vUv0 - pixelOffset);
    c = c.a > 0.0 ? c : texture2D(source, vUv0 + vec2(0, -pixelOffset.y));
    c = c.a > 0.0 ? c : texture2D(source, vUv0 + vec2(pixelOffset.x, -pixelOffset.y));
    c = c.a > 0.0 ? c : texture2D(source, vUv0 + vec2(-pixelOffset.x, 0));
    c = c.a > 0.0 ? c : texture2D(source, vUv0 + vec2(pixelOffset.x, 0));
    c = c.a > 0.0 ? c : texture2D(source, vUv0 + vec2(-pixelOffset.x, pixelOffset.y));
    c = c.a > 0.0 ? c : texture2D(source, vUv0 + vec2(0, pixelOffset.y));
    c = c.a > 0.0 ? c : texture2D(source, vUv0 + pixelOffset);
    gl_FragColor = c;
}
";

/// Alpha chunk override that writes nothing
pub const EMPTY_CHUNK: &str = "\n";
